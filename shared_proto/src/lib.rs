pub mod pb {
    // Exposes the `helloworld.Greeter` service definition.
    tonic::include_proto!("helloworld");
}
