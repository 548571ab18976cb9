use crate::config::Config;
use crate::gemini::GenerationClient;
use crate::log_debug;
use crate::messages::get_waiting_message;
use crate::studio::run_studio;
use crate::types::{AspectRatio, Campaign, GeneratedImage};
use crate::ui;
use crate::workflow::CampaignWorkflow;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::path::Path;
use std::str::FromStr;

/// Handle the `studio` command (and the bare invocation)
pub fn handle_studio() -> Result<()> {
    let config = Config::load()?;
    run_studio(&config)
}

/// Handle the `generate` command
pub async fn handle_generate(prompt: &str, aspect_ratio: &str, output: &Path) -> Result<()> {
    let aspect_ratio = AspectRatio::from_str(aspect_ratio)
        .map_err(|_| anyhow!("Unknown aspect ratio '{aspect_ratio}' (expected 16:9, 1:1, or 9:16)"))?;
    let config = Config::load()?;

    if prompt.trim().is_empty() {
        return Err(anyhow!("Campaign prompt must not be empty"));
    }

    let client = GenerationClient::new(&config);
    let workflow = CampaignWorkflow::new(client);

    let spinner = ui::create_spinner(&get_waiting_message().text);
    workflow.generate(prompt, aspect_ratio).await;
    spinner.finish_and_clear();

    let Some(campaign) = workflow.campaign().get() else {
        let message = workflow
            .error()
            .get()
            .unwrap_or_else(|| "Campaign generation failed".to_string());
        return Err(anyhow!(message));
    };

    print_campaign(&campaign);

    let image = workflow.image().get();
    if image.is_none()
        && let Some(error) = workflow.error().get()
    {
        // Partial success: campaign stands, only the hero image is withheld
        ui::print_warning(&error);
    }

    let html = render_html_preview(&campaign, image.as_ref());
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write HTML preview to {}", output.display()))?;
    log_debug!("Wrote HTML preview to {}", output.display());

    ui::print_newline();
    ui::print_success(&format!("Preview written to {}", output.display()));
    Ok(())
}

/// Handle the `config` command
pub fn handle_config() -> Result<()> {
    let config = Config::load_file()?;
    let config_path = Config::get_config_path()?;

    ui::print_info("mailmuse configuration");
    ui::print_message(&format!("  Config file:  {}", config_path.display()));
    ui::print_message(&format!("  Model:        {}", config.model));
    ui::print_message(&format!("  Image model:  {}", config.image_model));
    ui::print_message(&format!("  Verbose logs: {}", config.verbose_logging));

    match Config::load() {
        Ok(_) => ui::print_success("  API key:      found"),
        Err(_) => ui::print_warning("  API key:      missing (set GEMINI_API_KEY)"),
    }

    Ok(())
}

/// Print the generated campaign to the terminal
fn print_campaign(campaign: &Campaign) {
    let (r, g, b) = ui::rgb::ELECTRIC_PURPLE;
    let (cr, cg, cb) = ui::rgb::NEON_CYAN;

    println!();
    println!("{}", "── Campaign ──────────────────────────────".truecolor(r, g, b));
    println!("{} {}", "Subject:".truecolor(cr, cg, cb).bold(), campaign.subject.bold());
    println!("{} {}", "Preview:".truecolor(cr, cg, cb).bold(), campaign.preview_text);
    println!();
    println!("{}", crate::studio::html_to_text(&campaign.body));
    println!();
    println!(
        "{} {}",
        "Image prompt:".truecolor(cr, cg, cb).bold(),
        campaign.image_prompt.dimmed()
    );
}

/// Render the campaign as a standalone HTML email preview
///
/// The hero image, when present, is embedded directly via its data URI so
/// the file is self-contained.
pub fn render_html_preview(campaign: &Campaign, image: Option<&GeneratedImage>) -> String {
    let hero = image.map_or(String::new(), |img| {
        format!(
            r#"    <img class="hero" src="{}" alt="Campaign hero image">{}"#,
            img.data_uri(),
            "\n"
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{subject}</title>
  <style>
    body {{ font-family: Georgia, serif; max-width: 640px; margin: 2rem auto; color: #222; }}
    .preview {{ color: #777; font-style: italic; }}
    .hero {{ width: 100%; border-radius: 8px; margin: 1rem 0; }}
  </style>
</head>
<body>
  <h1>{subject}</h1>
  <p class="preview">{preview}</p>
{hero}  <div class="body">
{body}
  </div>
</body>
</html>
"#,
        subject = escape_html(&campaign.subject),
        preview = escape_html(&campaign.preview_text),
        hero = hero,
        body = campaign.body,
    )
}

/// Minimal escaping for text placed into HTML element content
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_campaign() -> Campaign {
        Campaign {
            subject: "50% off <today>".to_string(),
            preview_text: "Deals & more".to_string(),
            body: "<p>Hello</p>".to_string(),
            image_prompt: "sneakers".to_string(),
        }
    }

    #[test]
    fn preview_escapes_subject_but_keeps_body_html() {
        let html = render_html_preview(&sample_campaign(), None);
        assert!(html.contains("50% off &lt;today&gt;"));
        assert!(html.contains("Deals &amp; more"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(!html.contains("class=\"hero\""));
    }

    #[test]
    fn preview_embeds_hero_image_as_data_uri() {
        let image = GeneratedImage {
            mime_type: "image/jpeg".to_string(),
            data: "QUJD".to_string(),
        };
        let html = render_html_preview(&sample_campaign(), Some(&image));
        assert!(html.contains("src=\"data:image/jpeg;base64,QUJD\""));
    }
}
