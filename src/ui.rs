use crate::entities::{Appliance, ApplianceRegistry};
use crate::parser::{parse_appliance_line, MenuChoice, RawAppliance};
use crate::schema::{SchemaValidator, ValidationResult};
use anyhow::Result;
use std::io::{self, BufRead, Write};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub registry: ApplianceRegistry,
    pub validator: SchemaValidator,
}

impl App {
    pub fn new() -> Self {
        Self {
            registry: ApplianceRegistry::new(),
            validator: SchemaValidator::new(),
        }
    }

    /// Validate one raw registration and append it to the registry.
    ///
    /// On any violation nothing is committed - the registry is exactly
    /// as it was before the attempt.
    pub fn register(&mut self, raw: &RawAppliance) -> ValidationResult {
        self.validator.validate_appliance(raw)?;

        self.registry.register(Appliance::new(
            raw.name.clone(),
            raw.power_rating,
            raw.daily_usage_hours,
        ));

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// INTERACTIVE SESSION
// ============================================================================

/// Run the menu loop on the process's stdin/stdout.
pub fn run_ui(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    run_app(app, &mut input, &mut output)
}

/// The actual control loop, generic over reader/writer so tests can
/// drive it without a terminal.
///
/// States: Prompting -> {Registering, Viewing, Exiting, invalid choice},
/// and everything except Exiting falls back to Prompting. A closed input
/// stream also leaves through the exit path rather than spinning.
fn run_app<R: BufRead, W: Write>(app: &mut App, input: &mut R, output: &mut W) -> Result<()> {
    loop {
        writeln!(output, "Electrical Load Monitoring")?;
        writeln!(output, "1. Register appliance")?;
        writeln!(output, "2. View appliances")?;
        writeln!(output, "3. Exit")?;
        write!(output, "Enter choice: ")?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return farewell(output),
        };

        match MenuChoice::parse(&line) {
            MenuChoice::Register => {
                write!(
                    output,
                    "Enter appliance name, power rating (W), daily usage hours: "
                )?;
                output.flush()?;

                let entry_line = match read_line(input)? {
                    Some(line) => line,
                    None => return farewell(output),
                };

                let accepted = parse_appliance_line(&entry_line)
                    .map_err(|_| ())
                    .and_then(|raw| app.register(&raw).map_err(|_| ()));

                if accepted.is_err() {
                    writeln!(output, "Invalid input! Try again.")?;
                }
            }
            MenuChoice::View => {
                writeln!(output, "Registered appliances:")?;
                for appliance in app.registry.iter() {
                    writeln!(output, "{}", appliance.summary())?;
                }
            }
            MenuChoice::Exit => return farewell(output),
            MenuChoice::Invalid => {
                writeln!(output, "Invalid choice!")?;
            }
        }
    }
}

fn farewell<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Exiting...")?;
    output.flush()?;
    Ok(())
}

/// Read one line, None once the stream is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

// ============================================================================
// TESTS
// ============================================================================
