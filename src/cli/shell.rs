//! Interactive menu session
//!
//! Holds the session state: the loaded ledger and, once option 3 has been
//! used, the monthly budget. Tracking is refused until a budget is set.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use log::debug;

use super::menu::{format_menu, Flow, MenuCommand};
use super::prompt::Prompter;
use crate::display::format_budget_report;
use crate::error::TrackerResult;
use crate::models::{parse_amount, parse_date, Expense, MonthlyBudget};
use crate::services::{BudgetView, Ledger};

type Handler<R, W> = fn(&mut Shell<R, W>) -> TrackerResult<Flow>;

const SEPARATOR_WIDTH: usize = 26;
const FAREWELL_WIDTH: usize = 30;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The interactive expense tracker session
pub struct Shell<R, W> {
    ledger: Ledger,
    budget: Option<MonthlyBudget>,
    prompter: Prompter<R, W>,
    clock: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session over a loaded ledger, with no budget set
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            budget: None,
            prompter: Prompter::new(input, output),
            clock: today,
        }
    }

    /// Use a different source for "now" when building budget views
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Get the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The budget set during this session, if any
    pub fn budget(&self) -> Option<MonthlyBudget> {
        self.budget
    }

    /// Run the menu loop until the save-and-exit option is chosen
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            write!(self.prompter.output(), "{}", format_menu())?;
            let selection = self.prompter.ask_integer("Enter Option: ")?;

            let flow = match MenuCommand::from_selection(selection) {
                Some(command) => self.execute(command)?,
                None => Flow::Continue,
            };
            if flow == Flow::Exit {
                break;
            }

            writeln!(self.prompter.output(), "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }

        writeln!(self.prompter.output(), "{}", "-".repeat(FAREWELL_WIDTH))?;
        Ok(())
    }

    /// Run a single menu command
    pub fn execute(&mut self, command: MenuCommand) -> TrackerResult<Flow> {
        (Self::handler(command))(self)
    }

    /// Consume the session, returning the ledger and the output sink
    pub fn into_inner(self) -> (Ledger, W) {
        (self.ledger, self.prompter.into_output())
    }

    fn handler(command: MenuCommand) -> Handler<R, W> {
        match command {
            MenuCommand::AddExpense => Self::add_expense,
            MenuCommand::ViewExpenses => Self::view_expenses,
            MenuCommand::SetBudget => Self::set_monthly_budget,
            MenuCommand::TrackBudget => Self::track_budget,
            MenuCommand::Save => Self::save,
            MenuCommand::SaveAndExit => Self::save_and_exit,
        }
    }

    fn add_expense(&mut self) -> TrackerResult<Flow> {
        let out = self.prompter.output();
        writeln!(out, "\n---Adding Expense---")?;
        writeln!(out, "NOTE: If any field is empty or invalid, it will not be viewed.")?;

        let date_format = self.ledger.date_format().to_string();
        let date = self
            .prompter
            .ask_until("Date (YYYY-MM-DD): ", |text| parse_date(text, &date_format))?;
        let category = self.prompter.read_line("Category (Food, Travel, etc.): ")?;
        let amount = self.prompter.ask_until("Amount: $", parse_amount)?;
        let description = self.prompter.read_line("Short Description: ")?;

        self.ledger
            .add_expense(&Expense::new(date, category, amount, description));
        Ok(Flow::Continue)
    }

    fn view_expenses(&mut self) -> TrackerResult<Flow> {
        let table = self.ledger.view();
        let out = self.prompter.output();
        writeln!(out, "\n---Expenses---")?;
        writeln!(out, "{}", table)?;
        Ok(Flow::Continue)
    }

    fn set_monthly_budget(&mut self) -> TrackerResult<Flow> {
        let budget = self
            .prompter
            .ask_until("Enter your monthly budget: ", MonthlyBudget::parse)?;
        writeln!(
            self.prompter.output(),
            "Your monthly budget is set to {}.",
            budget
        )?;

        self.budget = Some(budget);
        Ok(Flow::Continue)
    }

    fn track_budget(&mut self) -> TrackerResult<Flow> {
        let Some(budget) = self.budget else {
            writeln!(
                self.prompter.output(),
                "You must enter monthly budget. (Option 3)"
            )?;
            return Ok(Flow::Continue);
        };

        let view = BudgetView::new(budget, &self.ledger, (self.clock)())?;
        let report = view.track()?;
        if report.total > budget.limit() {
            debug!("monthly budget of {} exceeded", budget);
        }

        write!(self.prompter.output(), "{}", format_budget_report(&report))?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> TrackerResult<Flow> {
        self.ledger.save()?;
        Ok(Flow::Continue)
    }

    fn save_and_exit(&mut self) -> TrackerResult<Flow> {
        self.ledger.save()?;
        Ok(Flow::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use crate::error::TrackerError;
    use crate::models::ExpenseRecord;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestShell = Shell<Cursor<Vec<u8>>, Vec<u8>>;

    fn march_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()
    }

    fn shell(ledger: Ledger, input: &str) -> TestShell {
        Shell::new(ledger, Cursor::new(input.as_bytes().to_vec()), Vec::new())
            .with_clock(march_2024)
    }

    fn output(shell: TestShell) -> String {
        String::from_utf8(shell.into_inner().1).unwrap()
    }

    fn in_memory(records: Vec<ExpenseRecord>) -> Ledger {
        Ledger::from_records(LedgerConfig::default(), records)
    }

    #[test]
    fn test_add_expense_with_retries() {
        let input = "2024-3-1\n2024-03-01\nFood\nabc\n12.5\nLunch\n";
        let mut sh = shell(in_memory(Vec::new()), input);

        assert_eq!(sh.execute(MenuCommand::AddExpense).unwrap(), Flow::Continue);
        assert_eq!(
            sh.ledger().records(),
            [ExpenseRecord::new("2024-03-01", "Food", "12.5", "Lunch")]
        );

        let out = output(sh);
        assert!(out.contains("---Adding Expense---"));
        assert_eq!(out.matches("Invalid date input.").count(), 1);
        assert_eq!(out.matches("Invalid input for amount.").count(), 1);
    }

    #[test]
    fn test_add_expense_accepts_empty_text_and_negative_amount() {
        let mut sh = shell(in_memory(Vec::new()), "2024-03-05\n\n-7.25\n\n");
        sh.execute(MenuCommand::AddExpense).unwrap();

        let record = &sh.ledger().records()[0];
        assert_eq!(record.category, "");
        assert_eq!(record.amount, "-7.25");
        assert!(!record.is_complete());
    }

    #[test]
    fn test_track_requires_budget() {
        let mut sh = shell(in_memory(Vec::new()), "");
        sh.execute(MenuCommand::TrackBudget).unwrap();
        assert!(output(sh).contains("You must enter monthly budget. (Option 3)"));
    }

    #[test]
    fn test_set_budget_reprompts() {
        let mut sh = shell(in_memory(Vec::new()), "abc\n0\n-5\n150\n");
        sh.execute(MenuCommand::SetBudget).unwrap();
        assert_eq!(sh.budget(), Some(MonthlyBudget::parse("150").unwrap()));

        let out = output(sh);
        assert_eq!(
            out.matches("Invalid input. Please enter a valid number.").count(),
            1
        );
        assert_eq!(out.matches("Budget must be a positive number.").count(), 2);
        assert!(out.contains("Your monthly budget is set to 150.00."));
    }

    #[test]
    fn test_track_budget_remaining_and_exceeded() {
        let records = vec![
            ExpenseRecord::new("2024-03-01", "Food", "12.50", "Lunch"),
            ExpenseRecord::new("2024-03-02", "Food", "-3.00", "Refund"),
            ExpenseRecord::new("2024-03-03", "Rent", "100", "Share"),
            ExpenseRecord::new("2024-02-03", "Rent", "900", "Last month"),
        ];

        let mut sh = shell(in_memory(records.clone()), "150\n");
        sh.execute(MenuCommand::SetBudget).unwrap();
        sh.execute(MenuCommand::TrackBudget).unwrap();
        let out = output(sh);
        assert!(out.contains("Total Amount: 109.50"));
        assert!(out.contains("You have $40.50 left for the month."));

        let mut sh = shell(in_memory(records), "100\n");
        sh.execute(MenuCommand::SetBudget).unwrap();
        sh.execute(MenuCommand::TrackBudget).unwrap();
        assert!(output(sh).contains("WARNING: You have exceeded your budget by 9.50."));
    }

    #[test]
    fn test_track_budget_malformed_store_is_fatal() {
        let records = vec![ExpenseRecord::new("2024-03-01", "Food", "lots", "Lunch")];
        let mut sh = shell(in_memory(records), "100\n");
        sh.execute(MenuCommand::SetBudget).unwrap();

        let err = sh.execute(MenuCommand::TrackBudget).unwrap_err();
        assert!(matches!(err, TrackerError::Parse { field: "Amount", .. }));
    }

    #[test]
    fn test_run_session() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::with_data_file(temp_dir.path().join("data.csv"));
        let ledger = Ledger::load(config.clone()).unwrap();

        let input = "x\n9\n1\n2024-03-01\nFood\n12.5\nLunch\n2\n6\n";
        let mut sh = shell(ledger, input);
        sh.run().unwrap();

        let out = output(sh);
        assert_eq!(out.matches("Options: ").count(), 4);
        assert_eq!(out.matches(&"-".repeat(30)).count(), 1);
        assert!(out.contains("---Expenses---"));
        assert!(out.lines().any(|l| l.contains("Food") && l.contains("Lunch")));

        assert_eq!(
            fs::read_to_string(config.data_file()).unwrap(),
            "Date,Category,Amount,Description\n2024-03-01,Food,12.5,Lunch\n"
        );
    }

    #[test]
    fn test_run_huge_selection_reprints_menu() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::with_data_file(temp_dir.path().join("data.csv"));
        let ledger = Ledger::load(config).unwrap();

        let mut sh = shell(ledger, "99999999999999999999\n6\n");
        sh.run().unwrap();

        let out = output(sh);
        assert_eq!(out.matches("Options: ").count(), 2);
        let separator = "-".repeat(SEPARATOR_WIDTH);
        assert_eq!(out.lines().filter(|l| *l == separator).count(), 1);
    }

    #[test]
    fn test_run_without_exit_reports_closed_input() {
        let mut sh = shell(in_memory(Vec::new()), "2\n");
        assert!(matches!(sh.run(), Err(TrackerError::InputClosed)));
    }
}
