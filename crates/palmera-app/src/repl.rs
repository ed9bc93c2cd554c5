//! Interactive chat loop: renders the conversation and relays choices.
//!
//! House options and booking summaries are rendered as numbered lists and
//! confirm/cancel prompts; everything else is free text sent as-is.

use std::io::{self, BufRead, Write};

use palmera_chat::{Attachment, ChatBackend, ChatError, ChatMessage, HouseOption, Sender, Session};
use palmera_common::Result;
use tracing::warn;

/// Affordance offered by the most recent assistant message.
enum Pending {
    Houses(Vec<HouseOption>),
    Summary,
}

pub async fn run(session: &mut Session, backend: &dyn ChatBackend) -> Result<()> {
    println!("Palmera booking assistant. Type /quit to exit, /new to restart.\n");
    for msg in session.messages() {
        render_message(msg);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let pending = pending_affordance(session);
        print_prompt(pending.as_ref())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        match input.as_str() {
            "/quit" | "/exit" => break,
            "/new" => {
                session.clear();
                println!();
                for msg in session.messages() {
                    render_message(msg);
                }
                continue;
            }
            _ => {}
        }

        let result = match &pending {
            Some(Pending::Houses(houses)) => match parse_selection(&input, houses.len()) {
                Some(index) => session.select_house(backend, &houses[index]).await,
                None => session.submit_user_text(backend, input.as_str()).await,
            },
            Some(Pending::Summary) => match input.to_lowercase().as_str() {
                "confirm" | "yes" | "y" => session.confirm_booking(backend).await,
                "cancel" | "no" | "n" => session.cancel_booking(backend).await,
                _ => session.submit_user_text(backend, input.as_str()).await,
            },
            None => session.submit_user_text(backend, input.as_str()).await,
        };

        match result {
            Ok(reply) => render_message(&reply),
            Err(e @ (ChatError::SessionBusy | ChatError::EmptyInput)) => {
                warn!("submission rejected: {e}");
            }
            Err(e) => {
                // submit_user_text resolves turn failures itself; anything
                // else is unexpected
                warn!("unexpected chat error: {e}");
            }
        }
    }

    Ok(())
}

fn pending_affordance(session: &Session) -> Option<Pending> {
    let last = session.messages().last()?;
    if last.sender != Sender::Assistant {
        return None;
    }
    match &last.attachment {
        Some(Attachment::HouseOptions(houses)) => Some(Pending::Houses(houses.clone())),
        Some(Attachment::BookingSummary(_)) => Some(Pending::Summary),
        None => None,
    }
}

/// Interpret input as a 1-based index into the offered house list.
fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.parse().ok()?;
    if n >= 1 && n <= count {
        Some(n - 1)
    } else {
        None
    }
}

fn render_message(msg: &ChatMessage) {
    match msg.sender {
        Sender::User => println!("you> {}", msg.text),
        Sender::Assistant => {
            println!("assistant> {}", msg.text);
            match &msg.attachment {
                Some(Attachment::HouseOptions(houses)) => {
                    for (i, house) in houses.iter().enumerate() {
                        println!(
                            "  {}. {} ({} guests, ${}/night)",
                            i + 1,
                            house.name,
                            house.guests,
                            house.price_per_night
                        );
                    }
                }
                Some(Attachment::BookingSummary(summary)) => {
                    println!("  ---- Booking Summary ----");
                    println!("  Date:       {}", summary.date);
                    println!("  Guests:     {}", summary.guests);
                    println!("  House Type: {}", summary.house_type);
                    println!("  -------------------------");
                }
                None => {}
            }
        }
    }
}

fn print_prompt(pending: Option<&Pending>) -> Result<()> {
    match pending {
        Some(Pending::Houses(houses)) => print!("pick 1-{} or type a message> ", houses.len()),
        Some(Pending::Summary) => print!("confirm/cancel> "),
        None => print!("> "),
    }
    io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parses_one_based_index() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection("3", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("villa", 3), None);
    }
}
