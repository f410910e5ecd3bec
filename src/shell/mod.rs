// ============================================================================
// Console Shell - Presentation Layer
// ============================================================================
//
// Thin surface over the depot session: parses operator lines, calls domain
// operations, renders state and outcomes. No business rule lives here; a
// command that fails validation is reported and nothing is applied.
//
// Runs either interactively over stdin or against a script file.
//
// ============================================================================

pub mod command;

pub use command::{ParseError, ShellCommand};

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::domain::courier::CourierId;
use crate::domain::order::OrderId;
use crate::domain::vehicle::VehicleId;
use crate::session::DepotSession;

const HELP: &str = "\
Commands:
  truck <make> <model> <registration> <capacity-kg>   register a truck
  motorcycle <make> <model> <registration> <top-speed> register a motorcycle
  courier <name>                                       register a courier
  order <destination> <weight-kg>                      create an order
  assign <courier-name> <vehicle-registration>         hand a pooled vehicle to a courier
  enqueue <courier-name> <order-id>                    queue a specific order on a courier
  deliver <courier-name>                               pull the next backlog order and run the queue
  state                                                show vehicles, couriers and orders
  export                                               dump the session as JSON
  help                                                 this text
  quit                                                 leave";

enum Flow {
    Continue,
    Quit,
}

/// Interactive loop over stdin. Returns when the operator quits or the
/// input stream closes.
pub fn run_interactive(session: &mut DepotSession) -> Result<()> {
    println!("Delivery depot console. Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("depot> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }

        if let Flow::Quit = dispatch_line(session, &line) {
            return Ok(());
        }
    }
}

/// Run every line of a script file, then return. Lines keep executing after
/// a failed command, matching the interactive behavior.
pub fn run_script(session: &mut DepotSession, path: &Path) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Cannot read script {}", path.display()))?;

    for line in script.lines() {
        if let Flow::Quit = dispatch_line(session, line) {
            break;
        }
    }
    Ok(())
}

fn dispatch_line(session: &mut DepotSession, line: &str) -> Flow {
    match ShellCommand::parse(line) {
        Ok(Some(command)) => match execute(session, command) {
            Ok(flow) => flow,
            Err(e) => {
                eprintln!("❌ {:#}", e);
                Flow::Continue
            }
        },
        Ok(None) => Flow::Continue,
        Err(e) => {
            eprintln!("❌ {}", e);
            Flow::Continue
        }
    }
}

fn execute(session: &mut DepotSession, command: ShellCommand) -> Result<Flow> {
    match command {
        ShellCommand::AddTruck { make, model, registration, capacity_kg } => {
            session.register_truck(&make, &model, &registration, capacity_kg);
            println!("Truck {} registered", registration);
        }
        ShellCommand::AddMotorcycle { make, model, registration, top_speed_kmh } => {
            session.register_motorcycle(&make, &model, &registration, top_speed_kmh);
            println!("Motorcycle {} registered", registration);
        }
        ShellCommand::AddCourier { name } => {
            session.register_courier(&name)?;
            println!("Courier {} registered", name);
        }
        ShellCommand::CreateOrder { destination, weight_kg } => {
            let id = session.create_order(&destination, weight_kg)?;
            println!("Order {} created", id);
        }
        ShellCommand::Assign { courier, registration } => {
            let courier_id = resolve_courier(session, &courier)?;
            let vehicle_id = resolve_vehicle(session, &registration)?;
            session.assign_vehicle(courier_id, vehicle_id)?;
            println!("Vehicle {} assigned to {}", registration, courier);
        }
        ShellCommand::Enqueue { courier, order_id } => {
            let courier_id = resolve_courier(session, &courier)?;
            session.enqueue_order(courier_id, OrderId(order_id))?;
            println!("Order {} queued on {}", order_id, courier);
        }
        ShellCommand::Deliver { courier } => {
            let courier_id = resolve_courier(session, &courier)?;
            session.dispatch_next(courier_id)?;

            let queued = session
                .depot()
                .courier(courier_id)
                .map(|c| c.queue_len())
                .unwrap_or(0);
            if queued == 0 {
                println!("No orders to deliver");
            } else {
                for outcome in session.run_deliveries(courier_id)? {
                    println!("{}", outcome);
                }
            }
        }
        ShellCommand::State => render_state(session),
        ShellCommand::Export => {
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn resolve_courier(session: &DepotSession, name: &str) -> Result<CourierId> {
    session
        .depot()
        .find_courier_by_name(name)
        .map(|c| c.id)
        .with_context(|| format!("No courier named {:?}", name))
}

fn resolve_vehicle(session: &DepotSession, registration: &str) -> Result<VehicleId> {
    session
        .depot()
        .find_available_by_registration(registration)
        .map(|v| v.id)
        .with_context(|| format!("No available vehicle registered {:?}", registration))
}

fn render_state(session: &DepotSession) {
    println!("---- Vehicles ----");
    for vehicle in session.depot().available_vehicles() {
        println!("{} [{}]", vehicle, vehicle.kind.name());
    }
    println!("---- Couriers ----");
    for courier in session.depot().couriers() {
        let queued: Vec<String> = courier.queued().map(|id| id.to_string()).collect();
        if queued.is_empty() {
            println!("{}", courier);
        } else {
            println!("{} | queued orders: {}", courier, queued.join(", "));
        }
    }
    println!("---- Orders ----");
    for order in session.orders().iter() {
        println!("{}", order);
    }
}
