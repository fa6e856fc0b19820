//! Compile the greeter service definition to be exposed and used
//! by the client crate and the test suite.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Source a protoc binary from the vendored crate when one is not
    // already provided by the environment, so the build does not depend
    // on a system-wide protobuf-compiler install.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["proto/helloworld.proto"], &["proto/"])?;
    Ok(())
}
