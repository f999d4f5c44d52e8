//! CLI truco example: you against a bot, one point per hand, first to 12.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use trucors::{Card, Dealer, Ruleset, StakeLevel, Trick};

const WINNING_SCORE: u8 = 12;

fn main() {
    println!("Truco CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dealer = Dealer::new(Ruleset::default(), seed);

    let mut your_score: u8 = 0;
    let mut bot_score: u8 = 0;

    while your_score < WINNING_SCORE && bot_score < WINNING_SCORE {
        let Ok(deal) = dealer.deal(2) else {
            println!("Deal failed, stopping.");
            return;
        };
        let stake = StakeLevel::One;

        println!(
            "\nVira: {} | manilha rank: {}",
            deal.vira,
            deal.trump_rank.name()
        );

        let mut your_hand = deal.hands[0].clone();
        let mut bot_hand = deal.hands[1].clone();
        let mut your_tricks: u8 = 0;
        let mut bot_tricks: u8 = 0;
        let mut you_lead = true;

        while your_tricks < 2 && bot_tricks < 2 && !your_hand.is_empty() {
            let mut trick = Trick::new();

            if you_lead {
                let Some(yours) = prompt_card(&mut your_hand) else {
                    return;
                };
                trick.play("you", yours);
                let bots = bot_hand.remove(0);
                println!("Bot plays {bots}");
                trick.play("bot", bots);
            } else {
                let bots = bot_hand.remove(0);
                println!("Bot plays {bots}");
                trick.play("bot", bots);
                let Some(yours) = prompt_card(&mut your_hand) else {
                    return;
                };
                trick.play("you", yours);
            }

            match trick.winner() {
                Ok("you") => {
                    println!("You take the trick.");
                    your_tricks += 1;
                    you_lead = true;
                }
                Ok(_) => {
                    println!("Bot takes the trick.");
                    bot_tricks += 1;
                    you_lead = false;
                }
                Err(err) => {
                    println!("Trick error: {err}");
                    return;
                }
            }
        }

        if your_tricks > bot_tricks {
            your_score += stake.points();
            println!("Hand is yours ({} point).", stake.points());
        } else {
            bot_score += stake.points();
            println!("Hand goes to the bot ({} point).", stake.points());
        }
        println!("Score: you {your_score} x {bot_score} bot");
    }

    if your_score >= WINNING_SCORE {
        println!("You win the game!");
    } else {
        println!("Bot wins the game.");
    }
}

fn prompt_card(hand: &mut Vec<Card>) -> Option<Card> {
    println!("Your hand:");
    for (index, card) in hand.iter().enumerate() {
        println!("  {index}: {card}");
    }

    loop {
        let input = prompt_line("Card to play: ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(index) if index < hand.len() => return Some(hand.remove(index)),
            _ => println!("Pick an index between 0 and {}.", hand.len() - 1),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
