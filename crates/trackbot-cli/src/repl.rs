use anyhow::Result;
use std::io::{self, Write};
use trackbot_assistant::QuickAction;
use trackbot_core::shipment::NotificationChannel;

pub fn run(mut app: super::App) -> Result<()> {
    println!("\x1b[1m📦 Advanced Logistics Delivery Assistant\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Welcome to your logistics assistant with GPS tracking and advanced features!");
    println!(
        "Analytics: \x1b[36m{}\x1b[0m{}",
        app.assistant.analytics_provider(),
        app.config
            .rng_seed
            .map(|seed| format!(" (seed {seed})"))
            .unwrap_or_default()
    );
    print_samples(&app);
    println!("Type \x1b[33m/help\x1b[0m for commands, \x1b[33mCtrl-D\x1b[0m to exit.\n");

    loop {
        eprint!("\x1b[32;1myou>\x1b[0m ");
        io::stderr().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }

        let input = input.trim().to_string();
        if input.is_empty() {
            continue;
        }

        if input.starts_with('/') {
            match handle_command(&input, &mut app) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => {
                    eprintln!("\x1b[31mCommand error: {e}\x1b[0m");
                    continue;
                }
            }
        }

        let reply = app.assistant.handle_message(&mut app.session, &input);
        super::output::render_reply(&reply);
        println!();
    }

    Ok(())
}

fn handle_command(input: &str, app: &mut super::App) -> Result<bool> {
    let (command, args) = match input.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (input, ""),
    };

    match command {
        "/help" | "/h" => {
            println!("\x1b[1mCommands:\x1b[0m");
            println!("  /samples    List sample tracking numbers");
            println!("  /track      {}", QuickAction::TrackPackage);
            println!("  /weather    {}", QuickAction::WeatherAlerts);
            println!("  /analytics  {}", QuickAction::ViewAnalytics);
            println!("  /carbon     {}", QuickAction::CarbonFootprint);
            println!("  /notify     Show or set notification preferences (email,sms,push)");
            println!("  /history    Show the conversation so far");
            println!("  /clear      Clear chat history");
            println!("  /exit       Exit");
            Ok(true)
        }
        "/exit" | "/quit" | "/q" => {
            println!("Goodbye!");
            Ok(false)
        }
        "/samples" | "/s" => {
            print_samples(app);
            Ok(true)
        }
        "/track" => run_quick_action(app, QuickAction::TrackPackage),
        "/weather" => run_quick_action(app, QuickAction::WeatherAlerts),
        "/analytics" => run_quick_action(app, QuickAction::ViewAnalytics),
        "/carbon" => run_quick_action(app, QuickAction::CarbonFootprint),
        "/notify" => {
            if !args.is_empty() {
                let channels = args
                    .split(',')
                    .map(|s| s.parse::<NotificationChannel>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                app.session.set_notification_preferences(channels);
            }
            let current: Vec<String> = app
                .session
                .notification_preferences()
                .iter()
                .map(|c| c.to_string())
                .collect();
            if current.is_empty() {
                println!("Notifications: none");
            } else {
                println!("Notifications: {}", current.join(", "));
            }
            Ok(true)
        }
        "/history" => {
            let turns = app.session.chat().list();
            if turns.is_empty() {
                println!("No messages yet.");
            }
            for turn in turns {
                super::output::render_turn(turn);
            }
            Ok(true)
        }
        "/clear" => {
            let removed = app.session.clear_chat();
            println!("Chat cleared ({removed} messages).");
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {input}. Type /help for available commands.");
            Ok(true)
        }
    }
}

fn run_quick_action(app: &mut super::App, action: QuickAction) -> Result<bool> {
    let text = app.assistant.quick_action(&mut app.session, action);
    println!("🤖 Assistant: {text}");
    Ok(true)
}

fn print_samples(app: &super::App) {
    let samples: Vec<&str> = app
        .session
        .shipments()
        .tracking_numbers()
        .map(|tn| tn.as_str())
        .collect();
    println!("Sample tracking numbers: \x1b[33m{}\x1b[0m", samples.join(", "));
}
