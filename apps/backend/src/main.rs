#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spellquest_backend::run().await
}
