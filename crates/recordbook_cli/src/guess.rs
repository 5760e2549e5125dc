//! Number guessing game.

use crate::console::Console;
use log::debug;
use rand::Rng;
use std::cmp::Ordering;
use std::io::{self, BufRead, Write};

pub const MAX_ATTEMPTS: u32 = 10;
pub const SECRET_RANGE: std::ops::Range<i64> = 0..100;

enum Round {
    Finished,
    InputClosed,
}

/// Plays rounds until the player declines another one or input ends.
pub fn play<G, I, O>(rng: &mut G, console: &mut Console<I, O>) -> io::Result<()>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    loop {
        let secret = rng.gen_range(SECRET_RANGE);
        debug!("event=guess_round module=cli status=start");
        if let Round::InputClosed = play_round(secret, console)? {
            return Ok(());
        }
        if !ask_to_play_again(console)? {
            return Ok(());
        }
    }
}

fn play_round<I, O>(secret: i64, console: &mut Console<I, O>) -> io::Result<Round>
where
    I: BufRead,
    O: Write,
{
    let mut attempts = 0;
    while attempts < MAX_ATTEMPTS {
        let prompt = format!(
            "Enter a number (remaining attempts: {}): ",
            MAX_ATTEMPTS - attempts
        );
        let Some(guess) = console.ask_until(&prompt, |raw| {
            raw.parse::<i64>().map_err(|_| "Please enter a whole number.")
        })?
        else {
            return Ok(Round::InputClosed);
        };
        attempts += 1;

        match guess.cmp(&secret) {
            Ordering::Equal => {
                console.say("Congratulations! You guessed the number.")?;
                debug!("event=guess_round module=cli status=ok attempts={attempts}");
                return Ok(Round::Finished);
            }
            Ordering::Less => console.say("The number to guess is higher.")?,
            Ordering::Greater => console.say("The number to guess is lower.")?,
        }
    }

    console.say(format!("You've run out of attempts. The number was: {secret}"))?;
    Ok(Round::Finished)
}

fn ask_to_play_again<I: BufRead, O: Write>(console: &mut Console<I, O>) -> io::Result<bool> {
    let answer = console.ask_until("Do you want to play again? (y/n): ", |raw| match raw {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err("Invalid option, please try again."),
    })?;
    if answer == Some(false) {
        console.say("Thanks for playing!")?;
    }
    Ok(answer.unwrap_or(false))
}
