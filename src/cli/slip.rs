//! Handlers for the slip editing commands.

use owo_colors::OwoColorize;

use super::output::{highlight, render_slip};
use super::SelectionArgs;
use crate::app::BetSlipSession;
use crate::domain::payout::payout_for_input;
use crate::domain::{format_money, SelectionAction, SelectionId};
use crate::error::{Error, Result};

/// Execute the show command.
pub fn show(session: &BetSlipSession) {
    println!();
    print!("{}", render_slip(session.slip()));
    if let Some(result) = session.last_result() {
        println!("  Last result: {}", result.message);
    }
    println!();
}

/// Execute the add command.
#[allow(clippy::result_large_err)]
pub fn add(session: &mut BetSlipSession, args: SelectionArgs) -> Result<()> {
    let (event, market, outcome, bookmaker) = args.into_parts()?;
    let label = format!("{} @ {}", outcome.name, outcome.price);
    let Some(id) = session.add_selection(event, market, outcome, bookmaker) else {
        return Err(Error::Input(format!(
            "combined odds with {label} are too large to price"
        )));
    };
    println!("{} Added {label} ({})", "✓".green(), highlight(&id));
    show(session);
    Ok(())
}

/// Execute the toggle command.
#[allow(clippy::result_large_err)]
pub fn toggle(session: &mut BetSlipSession, args: SelectionArgs) -> Result<()> {
    let (event, market, outcome, bookmaker) = args.into_parts()?;
    let label = outcome.name.clone();
    match session.select_or_deselect(event, market, outcome, bookmaker) {
        Some(SelectionAction::Add) => println!("{} Added {label}", "✓".green()),
        Some(SelectionAction::Remove(_)) => println!("{} Removed {label}", "✓".green()),
        None => {
            return Err(Error::Input(format!(
                "the slip could not be priced with {label} toggled"
            )))
        }
    }
    show(session);
    Ok(())
}

/// Execute the remove command.
#[allow(clippy::result_large_err)]
pub fn remove(session: &mut BetSlipSession, id: &str) -> Result<()> {
    if !session.remove_selection(&SelectionId::from(id)) {
        return Err(Error::Input(format!("no selection with ID {id}")));
    }
    println!("{} Removed {}", "✓".green(), highlight(id));
    show(session);
    Ok(())
}

/// Execute the stake command.
#[allow(clippy::result_large_err)]
pub fn stake(session: &mut BetSlipSession, amount: &str) -> Result<()> {
    if !session.set_stake_input(amount) {
        return Err(Error::Input(format!("{amount:?} is not a valid stake")));
    }
    show(session);
    Ok(())
}

/// Print the payout a stake would return, leaving the slip alone.
pub fn preview_stake(session: &BetSlipSession, amount: &str) {
    let slip = session.slip();
    let payout = payout_for_input(slip.total_odds(), amount);
    println!(
        "  {} at odds {} returns {}",
        amount.trim(),
        format_money(slip.total_odds()),
        highlight(format_money(payout))
    );
}

/// Execute the clear command.
pub fn clear(session: &mut BetSlipSession) {
    let removed = session.clear();
    println!("{} Cleared {removed} selection(s)", "✓".green());
}
