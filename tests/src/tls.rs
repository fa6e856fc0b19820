use openssl::asn1::{Asn1Integer, Asn1Time};
use openssl::bn::{BigNum, MsbOption};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, PKeyRef, Private};
use openssl::rsa::Rsa;
use openssl::x509::extension::{
    BasicConstraints, ExtendedKeyUsage, KeyUsage, SubjectAlternativeName,
};
use openssl::x509::{X509Builder, X509Name, X509Ref, X509};

/// Throwaway TLS material for exercising the client against an HTTPS test
/// server.
///
/// It fiddles with OpenSSL so that the tests do not have to: a certificate
/// authority plus a `localhost` server certificate signed by it.
pub struct TestTlsFixture {
    ca_certificate: X509,
    server_private_key: PKey<Private>,
    server_certificate: X509,
}

impl TestTlsFixture {
    /// Generate a certificate authority and a server certificate signed
    /// from the generated CA.
    pub fn generate() -> Self {
        let ca_private_key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let ca_certificate = generate_ca(&ca_private_key);
        let server_private_key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let server_certificate =
            generate_server_certificate(&server_private_key, &ca_certificate, &ca_private_key);
        Self {
            ca_certificate,
            server_private_key,
            server_certificate,
        }
    }

    /// The CA certificate as pem, the content of the client's `--cert` file.
    pub fn ca_pem(&self) -> Vec<u8> {
        self.ca_certificate
            .to_pem()
            .expect("failed to convert CA certificate to pem")
    }

    /// The server certificate as pem.
    pub fn server_certificate_pem(&self) -> Vec<u8> {
        self.server_certificate
            .to_pem()
            .expect("failed to convert server certificate to pem")
    }

    /// The server private key as pem.
    pub fn server_key_pem(&self) -> Vec<u8> {
        self.server_private_key
            .private_key_to_pem_pkcs8()
            .expect("failed to convert server key to pem")
    }
}

/// Generate a Certificate Authority (CA) for testing purposes.
fn generate_ca(private_key: &PKeyRef<Private>) -> X509 {
    let mut name = X509Name::builder().unwrap();
    name.append_entry_by_nid(Nid::COMMONNAME, "greeter-test-ca")
        .unwrap();
    let name = name.build();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(365).unwrap())
        .unwrap();
    builder.set_pubkey(private_key).unwrap();
    builder.set_serial_number(&random_serial()).unwrap();

    let basic_constraints = BasicConstraints::new().critical().ca().build().unwrap();
    builder.append_extension(basic_constraints).unwrap();
    let key_usage = KeyUsage::new()
        .critical()
        .digital_signature()
        .key_cert_sign()
        .crl_sign()
        .build()
        .unwrap();
    builder.append_extension(key_usage).unwrap();

    builder.sign(private_key, MessageDigest::sha256()).unwrap();

    builder.build()
}

/// Generate a `localhost` server certificate signed by the CA.
fn generate_server_certificate(
    server_private_key: &PKeyRef<Private>,
    ca_certificate: &X509Ref,
    ca_private_key: &PKeyRef<Private>,
) -> X509 {
    let mut name = X509Name::builder().unwrap();
    name.append_entry_by_nid(Nid::COMMONNAME, "localhost")
        .unwrap();
    let name = name.build();

    let mut builder = X509Builder::new().unwrap();
    builder.set_version(2).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(365).unwrap())
        .unwrap();
    builder.set_serial_number(&random_serial()).unwrap();
    builder.set_pubkey(server_private_key).unwrap();

    let ext_key_usage = ExtendedKeyUsage::new().server_auth().build().unwrap();
    builder.append_extension(ext_key_usage).unwrap();
    let subject_alternative_name = SubjectAlternativeName::new()
        .dns("localhost")
        .build(&builder.x509v3_context(Some(ca_certificate), None))
        .unwrap();
    builder.append_extension(subject_alternative_name).unwrap();

    builder
        .set_issuer_name(ca_certificate.subject_name())
        .unwrap();

    // Signing MUST be the last step, otherwise signature validation will fail
    builder.sign(ca_private_key, MessageDigest::sha256()).unwrap();

    builder.build()
}

fn random_serial() -> Asn1Integer {
    let mut serial = BigNum::new().unwrap();
    serial.rand(128, MsbOption::MAYBE_ZERO, false).unwrap();
    serial.to_asn1_integer().unwrap()
}
