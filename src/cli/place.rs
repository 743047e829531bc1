//! Handler for the `place` command.

use dialoguer::{theme::ColorfulTheme, Confirm};
use owo_colors::OwoColorize;

use super::output::{render_result, render_slip, spinner};
use crate::app::BetSlipSession;
use crate::domain::format_money;
use crate::error::{Error, Result, SubmissionError};

/// Execute the place command.
#[allow(clippy::result_large_err)]
pub async fn execute(session: &mut BetSlipSession, skip_prompt: bool) -> Result<()> {
    if !session.request_confirmation() {
        return Err(not_ready(session).into());
    }

    println!();
    print!("{}", render_slip(session.slip()));
    println!();

    if !skip_prompt {
        let prompt = format!(
            "Place {} on {} selection(s) to return {}?",
            format_money(session.slip().stake()),
            session.slip().len(),
            format_money(session.slip().potential_payout())
        );
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !confirmed {
            session.cancel_confirmation();
            println!("{}", "Bet cancelled".yellow());
            return Ok(());
        }
    }

    let Some(pending) = session.begin_submission() else {
        return Err(Error::Input("a bet is already being placed".into()));
    };

    let pb = spinner(&format!("Placing bet via {}...", pending.submitter_name()));
    let outcome = pending.run().await;
    pb.finish_and_clear();

    let Some(result) = session.finish_submission(outcome) else {
        return Err(Error::Input("submission was not in flight".into()));
    };
    if !result.success {
        return Err(SubmissionError::Rejected(result.message).into());
    }
    println!("{}", render_result(&result));
    Ok(())
}

fn not_ready(session: &BetSlipSession) -> SubmissionError {
    if session.slip().is_empty() {
        SubmissionError::EmptySlip
    } else {
        SubmissionError::InvalidStake
    }
}
