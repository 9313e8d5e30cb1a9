//! The interactive menu session.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::cli::menu::{CHOICE_PROMPT, INVALID_CHOICE_NOTICE, MENU, MenuChoice};
use crate::cli::prompts::{prompt_amount, prompt_reply};
use crate::error::PayrollResult;
use crate::models::{Developer, Manager, Roster};

/// An interactive payroll session over a pair of line-oriented streams.
///
/// The session owns the roster and drives the menu loop: display the menu,
/// read a choice, dispatch, repeat until the exit choice. It is generic
/// over the streams so tests can run whole sessions against in-memory
/// buffers.
///
/// # Examples
///
/// ```
/// use payroll_engine::cli::Session;
/// use rust_decimal::Decimal;
/// use std::io::Cursor;
///
/// let script = Cursor::new("1\nAlice\n70000\n10000\n4\n");
/// let mut output = Vec::new();
/// let mut session = Session::new(script, &mut output);
/// session.run()?;
/// assert_eq!(session.roster().len(), 1);
///
/// let roster = session.into_roster();
/// assert_eq!(roster.employees()[0].calculate_salary(), Decimal::from(80000));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty roster.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            roster: Roster::new(),
        }
    }

    /// Returns the roster built so far.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consumes the session and returns its roster.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Runs the menu loop until the exit choice is selected.
    ///
    /// A reply outside `1`-`4` prints a notice and redisplays the menu. A
    /// malformed amount or an input stream that ends mid-session ends the
    /// loop with the corresponding error; the roster keeps everything
    /// added before the failure.
    pub fn run(&mut self) -> PayrollResult<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let reply = prompt_reply(&mut self.input, &mut self.output, CHOICE_PROMPT)?;
            match reply.parse::<MenuChoice>() {
                Ok(MenuChoice::AddDeveloper) => self.add_developer()?,
                Ok(MenuChoice::AddManager) => self.add_manager()?,
                Ok(MenuChoice::ListEmployees) => self.list_employees()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the program. Goodbye!")?;
                    info!(employees = self.roster.len(), "session finished");
                    return Ok(());
                }
                Err(error) => {
                    debug!(%error, "menu reply not understood");
                    writeln!(self.output, "{INVALID_CHOICE_NOTICE}")?;
                }
            }
        }
    }

    fn add_developer(&mut self) -> PayrollResult<()> {
        let name = prompt_reply(&mut self.input, &mut self.output, "Enter Developer Name: ")?;
        let base_salary = prompt_amount(&mut self.input, &mut self.output, "Enter Base Salary: ₹")?;
        let bonus = prompt_amount(&mut self.input, &mut self.output, "Enter Bonus: ₹")?;

        self.roster.add(Developer::new(name, base_salary, bonus));
        info!(employees = self.roster.len(), "developer added");
        writeln!(self.output, "✅ Developer added successfully!\n")?;
        Ok(())
    }

    fn add_manager(&mut self) -> PayrollResult<()> {
        let name = prompt_reply(&mut self.input, &mut self.output, "Enter Manager Name: ")?;
        let base_salary = prompt_amount(&mut self.input, &mut self.output, "Enter Base Salary: ₹")?;
        let incentives = prompt_amount(&mut self.input, &mut self.output, "Enter Incentives: ₹")?;

        self.roster.add(Manager::new(name, base_salary, incentives));
        info!(employees = self.roster.len(), "manager added");
        writeln!(self.output, "✅ Manager added successfully!\n")?;
        Ok(())
    }

    fn list_employees(&mut self) -> PayrollResult<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "\nNo employees found.\n")?;
            return Ok(());
        }
        for employee in self.roster.employees() {
            writeln!(self.output, "\nEmployee Details:")?;
            writeln!(self.output, "{}", employee.details())?;
            writeln!(self.output, "Total Salary: ₹{}\n", employee.calculate_salary())?;
        }
        Ok(())
    }
}
