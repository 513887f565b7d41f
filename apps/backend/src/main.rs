#[tokio::main]
async fn main() -> anyhow::Result<()> {
    leitner_backend::run().await
}
