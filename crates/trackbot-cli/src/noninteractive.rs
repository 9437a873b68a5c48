use anyhow::Result;

pub fn run(mut app: super::App, prompt: String, output_format: super::OutputFormat) -> Result<()> {
    let reply = app.assistant.handle_message(&mut app.session, &prompt);

    match output_format {
        super::OutputFormat::Text => {
            super::output::render_reply(&reply);
        }
        super::OutputFormat::Json => {
            let output = serde_json::json!({
                "session_id": app.session.id(),
                "analytics_provider": app.assistant.analytics_provider(),
                "reply": reply,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
