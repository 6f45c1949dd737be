#[tokio::main]
async fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("taskflow-api-check".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    // Load config
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.taskflow.app", taskflow::config::CONFIG_VERSION)
        .expect("Failed to load config");
    let config = <taskflow::config::TaskflowConfig as cosmic::cosmic_config::CosmicConfigEntry>::get_entry(&cosmic_cfg)
        .unwrap_or_else(|(_, cfg)| cfg);

    let backend_url = std::env::var("TASKFLOW_BACKEND_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.backend_url.clone());

    println!("=== Backend Check: {} ===\n", backend_url);

    let client = taskflow::api::ApiClient::new(&backend_url);

    let users = match client.list_users(false).await {
        Ok(users) => {
            let active = users.iter().filter(|u| u.is_active).count();
            println!("Users: {} total, {} active", users.len(), active);
            users
        }
        Err(e) => {
            println!("Error listing users: {}", e);
            return;
        }
    };

    match client.list_tasks().await {
        Ok(tasks) => {
            println!("Tasks: {}", tasks.len());
            for task in &tasks {
                println!("  [{}] {}", task.priority.as_str(), task.title);
            }
        }
        Err(e) => println!("Error listing tasks: {}", e),
    }

    println!("\n--- Assignments per active user ---");
    for user in users.iter().filter(|u| u.is_active) {
        match client.list_assignments(&user.email).await {
            Ok(assignments) => {
                let completed = assignments
                    .iter()
                    .filter(|a| a.status.is_completed())
                    .count();
                println!(
                    "  {} <{}>: {} assignments, {} completed",
                    user.name,
                    user.email,
                    assignments.len(),
                    completed,
                );
            }
            Err(e) => println!("  {} <{}>: error: {}", user.name, user.email, e),
        }
    }

    println!("\n=== Done ===");
}
