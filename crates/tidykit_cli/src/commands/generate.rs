//! `tidykit generate`: one prompt, one printed response.

use tidykit_gen::{EnumContentStyle, GeminiClient, SpecGenerateConfig, generate_content};

pub async fn run(
    cfg_generate: SpecGenerateConfig,
    product: &str,
    style: Option<EnumContentStyle>,
) -> anyhow::Result<()> {
    let client = GeminiClient::new(cfg_generate)?;
    let txt = generate_content(&client, product, style).await?;
    println!("{txt}");
    Ok(())
}
