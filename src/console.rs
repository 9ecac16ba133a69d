//! Console presentation for the shift roster.
//!
//! Formats employees, shifts and schedules as plain text and drives the
//! interactive numbered menu. The menu is generic over its input and
//! output so it can run against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, NewEmployee, Shift};
use crate::roster::Roster;

const EMPLOYEE_TABLE_HEADER: &str = "Employee ID  Name                 Phone";
const EMPLOYEE_TABLE_RULE: &str = "----------- -------------------- ---------";

/// Formats employees as a fixed-width table.
///
/// # Examples
///
/// ```
/// use shift_roster::console::format_employee_table;
/// use shift_roster::models::NewEmployee;
///
/// let table = format_employee_table(&[NewEmployee::new("Ada", "555-0100").with_id("E001")]);
/// assert_eq!(table.lines().nth(2), Some("E001       Ada                 555-0100"));
/// ```
pub fn format_employee_table(employees: &[Employee]) -> String {
    let mut out = format!("{}\n{}\n", EMPLOYEE_TABLE_HEADER, EMPLOYEE_TABLE_RULE);
    for employee in employees {
        out.push_str(&format!(
            "{:<11}{:<20}{}\n",
            employee.employee_id, employee.name, employee.phone
        ));
    }
    out
}

/// Formats an employee's schedule as `date,start,end` CSV.
pub fn format_schedule(shifts: &[Shift]) -> String {
    let mut out = String::from("date,start,end\n");
    for shift in shifts {
        out.push_str(&format!(
            "{},{},{}\n",
            shift.date, shift.start_time, shift.end_time
        ));
    }
    out
}

/// Formats every shift as `shiftId,date,start,end` CSV.
pub fn format_shift_list(shifts: &[Shift]) -> String {
    let mut out = String::from("shiftId,date,start,end\n");
    for shift in shifts {
        out.push_str(&format!(
            "{},{},{},{}\n",
            shift.shift_id, shift.date, shift.start_time, shift.end_time
        ));
    }
    out
}

/// The interactive numbered menu.
pub struct Menu<'a, R, W> {
    roster: &'a Roster,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a menu over the given roster and streams.
    pub fn new(roster: &'a Roster, input: R, output: W) -> Self {
        Self {
            roster,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Store failures end the session and are returned to the caller.
    pub fn run(&mut self) -> EngineResult<()> {
        loop {
            writeln!(self.output, "1. Show all employees")?;
            writeln!(self.output, "2. Add new employee")?;
            writeln!(self.output, "3. Assign employee to shift")?;
            writeln!(self.output, "4. View employee schedule")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("What is your choice> ")? else {
                break;
            };
            debug!(choice = %choice, "Menu selection");

            match choice.trim() {
                "1" => self.show_employees()?,
                "2" => self.add_employee()?,
                "3" => self.assign_shift()?,
                "4" => self.show_schedule()?,
                "5" => break,
                _ => {
                    writeln!(self.output, "Error in selection")?;
                    continue;
                }
            }
            write!(self.output, "\n\n\n")?;
        }

        writeln!(self.output, "*** Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints a prompt and reads one line, without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> EngineResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_or_empty(&mut self, text: &str) -> EngineResult<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    fn show_employees(&mut self) -> EngineResult<()> {
        let employees = self.roster.list_employees()?;
        write!(self.output, "{}", format_employee_table(&employees))?;
        Ok(())
    }

    fn add_employee(&mut self) -> EngineResult<()> {
        let name = self.prompt_or_empty("Enter employee name: ")?;
        let phone = self.prompt_or_empty("Enter phone number: ")?;
        self.roster.create_employee(NewEmployee::new(name, phone))?;
        writeln!(self.output, "Employee added...")?;
        Ok(())
    }

    fn assign_shift(&mut self) -> EngineResult<()> {
        let employee_id = self.prompt_or_empty("Enter employee ID: ")?;
        let shift_id = self.prompt_or_empty("Enter shift ID: ")?;
        let outcome = self.roster.assign_shift(&employee_id, &shift_id)?;
        writeln!(self.output, "{}", outcome)?;
        Ok(())
    }

    fn show_schedule(&mut self) -> EngineResult<()> {
        let employee_id = self.prompt_or_empty("Enter employee ID: ")?;
        let shifts = self.roster.schedule(&employee_id)?;
        write!(self.output, "\n\n\n{}", format_schedule(&shifts))?;
        Ok(())
    }
}
