//! Interactive menu loop for the booking console.

use anyhow::{Result, bail};
use chrono::Utc;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::debug;
use std::io::{self, Write};

use bistro_booking::{
    BookingLedger, BookingOutcome, BookingRequest, BookingStats, QueueGenerator,
};

const MENU: &str = "\
Menu:
  1. Create a guest queue
  2. Seat the guests
  3. Show table status
  4. Show booking statistics
  5. Quit
";

/// A console session: the ledger, its statistics, and the pending queue.
pub struct Console {
    ledger: BookingLedger,
    stats: BookingStats,
    generator: QueueGenerator,
    queue: Vec<BookingRequest>,
}

impl Console {
    pub fn new(ledger: BookingLedger, generator: QueueGenerator) -> Self {
        Self {
            ledger,
            stats: BookingStats::new(),
            generator,
            queue: Vec::new(),
        }
    }

    /// The interactive menu loop. Expired holds are released at the top of
    /// every iteration, before the menu is shown.
    pub fn run(&mut self) -> Result<()> {
        loop {
            clear_screen()?;
            self.tick();
            print!("{MENU}");
            let choice = read_line("Select an option: ")?;

            match choice.trim() {
                "1" => {
                    self.create_queue();
                    pause()?;
                }
                "2" => {
                    self.seat_guests()?;
                    pause()?;
                }
                "3" => {
                    self.show_status();
                    pause()?;
                }
                "4" => {
                    self.show_stats();
                    pause()?;
                }
                "5" => return Ok(()),
                _ => {
                    println!("Invalid choice. Try again.");
                    pause()?;
                }
            }
        }
    }

    /// Non-interactive session: one queue, seated in bulk, then status and
    /// statistics.
    pub fn run_automatic(&mut self, json: bool) -> Result<()> {
        self.create_queue();
        self.seat_in_bulk();
        if json {
            let snapshot = self.ledger.status_snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            self.show_status();
        }
        self.show_stats();
        Ok(())
    }

    /// Release lapsed holds and surface the freed-table notices.
    fn tick(&mut self) {
        let freed = self.ledger.release_expired(Utc::now());
        debug!("tick released {} hold(s)", freed.len());
        self.print_events();
    }

    fn create_queue(&mut self) {
        self.queue = self.generator.generate(self.ledger.slots());
        println!("Queue created. Guests in seating order:");
        self.show_queue();
    }

    fn show_queue(&self) {
        if self.queue.is_empty() {
            println!("The queue is empty.");
            return;
        }
        for request in &self.queue {
            println!("  {request}");
        }
    }

    fn seat_guests(&mut self) -> Result<()> {
        if self.queue.is_empty() {
            println!("The queue is empty or not created yet. Create a guest queue first.");
            return Ok(());
        }

        println!("Seating mode:");
        println!("  1. Seat guests one by one");
        println!("  2. Seat the whole queue at once");
        let choice = read_line("Your choice: ")?;

        match choice.trim() {
            "1" => self.seat_one_by_one()?,
            "2" => self.seat_in_bulk(),
            _ => println!("Invalid choice. Try again."),
        }
        Ok(())
    }

    fn seat_one_by_one(&mut self) -> Result<()> {
        while !self.queue.is_empty() {
            let request = self.queue.remove(0);
            println!("\nNext guest: {request}");
            self.book_one(&request);
            pause()?;
        }
        Ok(())
    }

    /// Seat every queued guest without stopping; failed guests are skipped,
    /// never retried.
    fn seat_in_bulk(&mut self) {
        for request in std::mem::take(&mut self.queue) {
            self.book_one(&request);
        }
    }

    fn book_one(&mut self, request: &BookingRequest) {
        let outcome = self.ledger.book(request, Utc::now());
        self.stats.record(&outcome);
        if let Some(message) = turn_away_message(request, &outcome) {
            println!("{message}");
        }
        self.print_events();
    }

    fn print_events(&mut self) {
        for event in self.ledger.drain_events() {
            println!("[Restaurant]: {event}");
        }
    }

    fn show_status(&self) {
        println!("\n[Table status]");
        print!("{}", self.ledger.status_snapshot());
    }

    fn show_stats(&self) {
        println!("\n[Booking statistics]");
        println!("  Successful bookings: {}", self.stats.successful());
        println!("  Failed bookings: {}", self.stats.failed());
    }
}

/// The guest-facing apology for a failed attempt; successful bookings are
/// announced through the restaurant event instead.
fn turn_away_message(request: &BookingRequest, outcome: &BookingOutcome) -> Option<String> {
    match outcome {
        BookingOutcome::Booked(_) => None,
        BookingOutcome::InvalidTimeSlot => Some(format!(
            "{}, the requested time {} is not a bookable slot.",
            request.name, request.slot
        )),
        BookingOutcome::NoTablesAvailable => Some(format!(
            "{}, sorry, every table at {} is taken. Come see us another time.",
            request.name, request.slot
        )),
    }
}

/// Prompt until a positive table count is entered.
pub fn prompt_table_count() -> Result<usize> {
    loop {
        let input = read_line("Number of tables in the dining room: ")?;
        match input.trim().parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => println!("Enter a whole number greater than zero."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("stdin closed");
    }
    Ok(input)
}

fn pause() -> Result<()> {
    read_line("Press Enter to continue...")?;
    Ok(())
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
