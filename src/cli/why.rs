use std::process::ExitCode;

use crate::default_registry;

/// Show rule documentation from the descriptor registry.
pub fn run_why(rule: Option<String>, list: bool) -> ExitCode {
    let registry = default_registry();

    if list || rule.is_none() {
        for registration in registry.registrations() {
            let descriptor = registration.descriptor;
            let tier = (registration.factory)().tier();
            let default_note = if descriptor.enabled_by_default {
                ""
            } else {
                " (off by default)"
            };
            println!(
                "{:<28} [{}] {}{}",
                descriptor.name,
                tier.name(),
                descriptor.summary,
                default_note
            );
        }
        return ExitCode::SUCCESS;
    }

    let name = rule.unwrap_or_default();
    let Some(registration) = registry.get(&name) else {
        eprintln!("Unknown rule '{}'. Use --list to see available rules.", name);
        return ExitCode::from(2);
    };

    let descriptor = registration.descriptor;
    println!("{}", descriptor.name);
    println!("  tier: {}", (registration.factory)().tier().name());
    println!(
        "  enabled by default: {}",
        if descriptor.enabled_by_default { "yes" } else { "no" }
    );
    println!();
    println!("{}", descriptor.description);
    if !descriptor.parameters.is_empty() {
        println!();
        println!("Options:");
        for param in descriptor.parameters {
            println!(
                "  {} ({}, default {}): {}",
                param.name,
                param.param_type.name(),
                param.default_value,
                param.help
            );
        }
    }
    ExitCode::SUCCESS
}
