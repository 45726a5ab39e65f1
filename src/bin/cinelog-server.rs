#[tokio::main]
async fn main() {
    cinelog::server::start_server().await;
}
