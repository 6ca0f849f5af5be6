#[tokio::main]
async fn main() {
  hn_algolia::run().await;
}
