#[tokio::main]
async fn main() {
    snacky::start_server().await;
}
