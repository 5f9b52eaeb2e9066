#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopping_list_lib::run().await
}
