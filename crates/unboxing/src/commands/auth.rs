//! Sign-in, registration, sign-out and the dashboard guard.

use secrecy::ExposeSecret;
use unboxing_core::pages::auth::{LOGIN_FORM, LOGOUT_BUTTON, REGISTER_FORM};
use unboxing_core::{FormData, PageId, Tone};

use crate::cli::{LoginArgs, RegisterArgs};
use crate::error::CliError;
use crate::output;

use super::{Screens, util};

const SECTIONS: &[(&str, &str)] = &[
    ("customers", "Customer records"),
    ("billing", "Billing records"),
    ("payroll", "Payroll records"),
    ("users", "User accounts"),
];

pub async fn login(screens: &mut Screens, args: LoginArgs) -> Result<(), CliError> {
    let profile_email = screens.resolved.profile.email.clone();
    let email = util::text_or_prompt(args.email, "Email", profile_email.as_deref())?;
    let password = util::password_or_prompt(args.password)?;

    let input = FormData::new()
        .with("email", email.as_str())
        .with("password", password);
    screens.submit(PageId::Login, LOGIN_FORM, input).await?;

    screens.surface.notify(
        Tone::Success,
        &format!(
            "Signed in as {email} (profile '{}')",
            screens.resolved.profile_name
        ),
    );
    if !screens.persistent {
        screens.surface.notify(
            Tone::Info,
            "No system keyring available. Pass this token with --token or UNBOXING_TOKEN:",
        );
        if let Some(token) = screens.ctx.session.credential() {
            output::print_output(token.expose_secret(), false);
        }
    }
    Ok(())
}

pub async fn register(screens: &mut Screens, args: RegisterArgs) -> Result<(), CliError> {
    let password = util::password_or_prompt(args.password)?;

    let mut input = FormData::new()
        .with("name", args.name)
        .with("email", args.email)
        .with("password", password);
    util::set_opt(&mut input, "secret-key", args.secret_key);

    screens.submit(PageId::Registration, REGISTER_FORM, input).await?;
    screens.surface.notify(Tone::Success, "Registration accepted");
    Ok(())
}

pub async fn logout(screens: &mut Screens) -> Result<(), CliError> {
    screens.click(PageId::Dashboard, LOGOUT_BUTTON).await?;
    screens.surface.notify(Tone::Success, "Signed out");
    Ok(())
}

pub async fn dashboard(screens: &mut Screens) -> Result<(), CliError> {
    screens.load(PageId::Dashboard).await?;

    let mut lines = vec![format!(
        "Signed in (profile '{}', {})",
        screens.resolved.profile_name, screens.resolved.base_url
    )];
    lines.extend(
        SECTIONS
            .iter()
            .map(|(command, label)| format!("  unboxing {command:<10} {label}")),
    );
    screens.surface.notify(Tone::Info, &lines.join("\n"));
    Ok(())
}
