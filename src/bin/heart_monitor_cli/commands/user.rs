// ABOUTME: Profile and session commands for heart-monitor-cli
// ABOUTME: Handles register, login, whoami, and logout against the session registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use heart_monitor::{errors::AppResult, models::RegistrationRequest};
use tracing::info;

use crate::helpers::display::display_profile;
use crate::Registry;

type Result<T> = AppResult<T>;

/// Register a new profile and sign it in
pub async fn register(registry: &Registry, request: RegistrationRequest) -> Result<()> {
    let profile = registry.register(request).await?;
    info!("Registered new profile");
    println!("\nProfile registered and signed in.");
    display_profile(&profile.to_public());
    Ok(())
}

/// Sign in with an email and password
pub async fn login(registry: &Registry, email: &str, password: &str) -> Result<()> {
    let profile = registry.authenticate(email, password).await?;
    println!("\nSigned in.");
    display_profile(&profile.to_public());
    Ok(())
}

/// Print the signed-in profile, if any
pub async fn whoami(registry: &Registry) {
    match registry.current_user().await {
        Some(profile) => display_profile(&profile.to_public()),
        None => println!("Not signed in."),
    }
}

/// Sign the current profile out
pub async fn logout(registry: &Registry) -> Result<()> {
    let was_signed_in = registry.is_authenticated().await;
    registry.sign_out().await?;
    if was_signed_in {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}
