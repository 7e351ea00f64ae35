//! Interactive collection of employee preferences.
//!
//! [`ConsoleSession`] prompts over any buffered reader and writer, so the
//! same flow runs against a terminal or an in-memory script in tests.
//! Typing `exit` at any prompt, or closing the input, ends the session with
//! [`SchedulerError::Cancelled`], which callers propagate with `?`.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::demo::sample_roster;
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Day, EmployeePreferences, Roster, ShiftType};

/// The sentinel that cancels the session from any prompt.
pub const EXIT_COMMAND: &str = "exit";

/// Returns true if `input` is the exit sentinel (case-insensitive,
/// surrounding whitespace ignored).
pub fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// What the user chose at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Enter employees by hand.
    Manual,
    /// Use the built-in sample roster.
    Demo,
}

/// A prompting session over an input and an output stream.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes a line to the output.
    pub fn say(&mut self, message: &str) -> SchedulerResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Shows `label` and reads one trimmed line.
    fn prompt(&mut self, label: &str) -> SchedulerResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed at prompt");
            return Err(SchedulerError::Cancelled);
        }
        if is_exit_command(&line) {
            debug!("Exit command received");
            return Err(SchedulerError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    /// Runs the whole flow: menu, then either the sample roster or manual
    /// entry. Returns `None` when manual entry produced no employees.
    pub fn gather_roster(&mut self) -> SchedulerResult<Option<Roster>> {
        self.say("Employee Schedule Manager")?;
        self.say(
            "Options: 1 = Enter data manually  2 = Run demo with sample data  (type 'exit' anytime to quit)",
        )?;

        if self.menu_choice()? == MenuChoice::Demo {
            return Ok(Some(sample_roster()));
        }

        let use_priority = self.ask_use_priority()?;
        let roster = self.collect_roster(use_priority)?;
        if roster.is_empty() {
            self.say("No employees entered.")?;
            return Ok(None);
        }
        Ok(Some(roster))
    }

    /// Asks for `1` (manual entry) or `2` (demo) until one is given. Any
    /// other answer re-prompts rather than falling through to manual entry.
    pub fn menu_choice(&mut self) -> SchedulerResult<MenuChoice> {
        loop {
            match self.prompt("Choice (1/2): ")?.as_str() {
                "1" => return Ok(MenuChoice::Manual),
                "2" => return Ok(MenuChoice::Demo),
                _ => self.say("Please enter 1 or 2.")?,
            }
        }
    }

    /// Asks whether to collect priority rankings; only `y` means yes.
    pub fn ask_use_priority(&mut self) -> SchedulerResult<bool> {
        let answer = self.prompt("Use priority ranking for shifts? (y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Asks for the number of employees. Zero or negative counts mean none.
    pub fn ask_employee_count(&mut self) -> SchedulerResult<usize> {
        loop {
            let answer = self.prompt("Number of employees: ")?;
            match answer.parse::<i64>() {
                Ok(count) => return Ok(usize::try_from(count).unwrap_or(0)),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    /// Asks for a rank (1-3) for each shift, in declared order, and returns
    /// the shifts most-preferred first.
    pub fn ask_priority_order(&mut self) -> SchedulerResult<[ShiftType; ShiftType::COUNT]> {
        self.say("  Enter priority order (1=most preferred, 2=second, 3=least preferred):")?;

        let mut order: [Option<ShiftType>; ShiftType::COUNT] = [None; ShiftType::COUNT];
        for shift in ShiftType::ALL {
            loop {
                let answer = self.prompt(&format!("    {}: rank (1-3): ", shift))?;
                let slot = answer
                    .parse::<usize>()
                    .ok()
                    .filter(|rank| (1..=ShiftType::COUNT).contains(rank))
                    .map(|rank| rank - 1)
                    .filter(|index| order[*index].is_none());
                match slot {
                    Some(index) => {
                        order[index] = Some(shift);
                        break;
                    }
                    None => self.say("    Invalid or duplicate rank. Use 1, 2, 3 each once.")?,
                }
            }
        }

        // Three distinct ranks were assigned to three shifts.
        let mut ranked = ShiftType::ALL;
        for (slot, shift) in ranked.iter_mut().zip(order) {
            if let Some(shift) = shift {
                *slot = shift;
            }
        }
        Ok(ranked)
    }

    /// Asks for the preferred shift on each day of the week.
    pub fn ask_daily_preferences(&mut self) -> SchedulerResult<[ShiftType; Day::COUNT]> {
        let mut daily = [ShiftType::Morning; Day::COUNT];
        for day in Day::ALL {
            loop {
                let answer = self.prompt(&format!(
                    "  {} preferred shift (morning/afternoon/evening): ",
                    day
                ))?;
                match answer.parse::<ShiftType>() {
                    Ok(shift) => {
                        daily[day.index()] = shift;
                        break;
                    }
                    Err(_) => self.say("    Invalid. Enter morning, afternoon, or evening.")?,
                }
            }
        }
        Ok(daily)
    }

    /// Collects employees one by one. Blank names are skipped and still
    /// count towards the requested number; repeated names are asked again.
    pub fn collect_roster(&mut self, use_priority: bool) -> SchedulerResult<Roster> {
        let count = self.ask_employee_count()?;
        let mut roster = Roster::new();

        for _ in 0..count {
            let name = loop {
                let name = self.prompt("Employee name: ")?;
                if roster.contains(&name) {
                    self.say("    Name already entered. Use a different name.")?;
                    continue;
                }
                break name;
            };
            if name.is_empty() {
                continue;
            }

            let priority = if use_priority {
                Some(self.ask_priority_order()?)
            } else {
                None
            };
            let daily = self.ask_daily_preferences()?;

            roster.add(EmployeePreferences {
                name,
                daily,
                priority,
            })?;
        }

        debug!(employees = roster.len(), "Collected roster from console");
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use ShiftType::{Afternoon, Evening, Morning};

    fn session(script: &str) -> ConsoleSession<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleSession::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(session: ConsoleSession<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_inner().1).unwrap()
    }

    #[test]
    fn test_is_exit_command() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("  EXIT\n"));
        assert!(!is_exit_command("exiting"));
    }

    #[test]
    fn test_exit_cancels_from_any_prompt() {
        let mut s = session("1\ny\n2\nAlice\nExit\n");
        let result = s.gather_roster();
        assert!(matches!(result, Err(SchedulerError::Cancelled)));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut s = session("");
        assert!(matches!(s.menu_choice(), Err(SchedulerError::Cancelled)));
    }

    #[test]
    fn test_menu_reprompts_until_valid() {
        let mut s = session("3\nabc\n2\n");
        assert_eq!(s.menu_choice().unwrap(), MenuChoice::Demo);
        assert_eq!(output_of(s).matches("Please enter 1 or 2.").count(), 2);
    }

    #[test]
    fn test_demo_choice_returns_sample_roster() {
        let mut s = session("2\n");
        let roster = s.gather_roster().unwrap().unwrap();
        assert_eq!(roster, sample_roster());
    }

    #[test]
    fn test_employee_count_reprompts_on_garbage_and_clamps_negative() {
        let mut s = session("lots\n-4\n");
        assert_eq!(s.ask_employee_count().unwrap(), 0);
        assert!(output_of(s).contains("Please enter a whole number."));
    }

    #[test]
    fn test_priority_order_rejects_duplicate_and_out_of_range_ranks() {
        // morning=2, afternoon: 2 (dup) then 4 (range) then 3, evening=1
        let mut s = session("2\n2\n4\n3\n1\n");
        let order = s.ask_priority_order().unwrap();
        assert_eq!(order, [Evening, Morning, Afternoon]);
        assert_eq!(output_of(s).matches("Invalid or duplicate rank").count(), 2);
    }

    #[test]
    fn test_daily_preferences_reprompt_on_unknown_shift() {
        let mut s =
            session("morning\nnight\nAfternoon\nevening\nmorning\nafternoon\nevening\nmorning\n");
        let daily = s.ask_daily_preferences().unwrap();
        assert_eq!(
            daily,
            [Morning, Afternoon, Evening, Morning, Afternoon, Evening, Morning]
        );
        assert!(output_of(s).contains("Invalid. Enter morning, afternoon, or evening."));
    }

    #[test]
    fn test_manual_entry_without_priority() {
        let week = "evening\n".repeat(7);
        let script = format!("1\nn\n1\nCarol\n{}", week);
        let mut s = session(&script);

        let roster = s.gather_roster().unwrap().unwrap();
        let carol = roster.get("Carol").unwrap();
        assert_eq!(carol.daily, [Evening; 7]);
        assert_eq!(carol.priority, None);
    }

    #[test]
    fn test_manual_entry_with_priority() {
        let week = "morning\n".repeat(7);
        let script = format!("1\ny\n1\nAlice\n1\n2\n3\n{}", week);
        let mut s = session(&script);

        let roster = s.gather_roster().unwrap().unwrap();
        assert_eq!(
            roster.get("Alice").unwrap().priority,
            Some([Morning, Afternoon, Evening])
        );
    }

    #[test]
    fn test_blank_name_is_skipped_and_counted() {
        let week = "morning\n".repeat(7);
        let script = format!("2\n\nBob\n{}", week);
        let mut s = session(&script);

        let roster = s.collect_roster(false).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.contains("Bob"));
    }

    #[test]
    fn test_duplicate_name_is_asked_again() {
        let week = "morning\n".repeat(7);
        let script = format!("2\nBob\n{week}Bob\nBetty\n{week}");
        let mut s = session(&script);

        let roster = s.collect_roster(false).unwrap();
        let names: Vec<&str> = roster.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Betty"]);
        assert!(output_of(s).contains("Name already entered."));
    }

    #[test]
    fn test_zero_employees_reports_empty_roster() {
        let mut s = session("1\nn\n0\n");
        assert!(s.gather_roster().unwrap().is_none());
        assert!(output_of(s).contains("No employees entered."));
    }
}
