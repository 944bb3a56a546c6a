use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    faqbot::run().await
}
