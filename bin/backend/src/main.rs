//! Backend Server Binary
//!
//! Serves auth and todo routes on BIND_ADDR (e.g. 0.0.0.0:8888).

#[tokio::main]
async fn main() {
    minder_core::log();
    minder_server::run().await.unwrap();
}
