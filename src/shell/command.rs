// ============================================================================
// Shell Commands - Operator Intent
// ============================================================================
//
// One variant per console action. The parser only validates shape and
// numeric syntax; domain rules (weight range, name alphabet, pool
// membership) stay in the domain layer.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    AddTruck {
        make: String,
        model: String,
        registration: String,
        capacity_kg: f64,
    },
    AddMotorcycle {
        make: String,
        model: String,
        registration: String,
        top_speed_kmh: f64,
    },
    AddCourier {
        name: String,
    },
    CreateOrder {
        destination: String,
        weight_kg: f64,
    },
    Assign {
        courier: String,
        registration: String,
    },
    Enqueue {
        courier: String,
        order_id: u64,
    },
    Deliver {
        courier: String,
    },
    State,
    Export,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command: {0:?} (try 'help')")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a number: {0:?}")]
    InvalidNumber(String),
}

impl ShellCommand {
    /// Parse one console line. Blank lines and `#` comments parse to None.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let command = match tokens[0] {
            "truck" => match &tokens[1..] {
                [make, model, registration, capacity] => ShellCommand::AddTruck {
                    make: make.to_string(),
                    model: model.to_string(),
                    registration: registration.to_string(),
                    capacity_kg: parse_number(capacity)?,
                },
                _ => return Err(ParseError::Usage("truck <make> <model> <registration> <capacity-kg>")),
            },
            "motorcycle" | "moto" => match &tokens[1..] {
                [make, model, registration, top_speed] => ShellCommand::AddMotorcycle {
                    make: make.to_string(),
                    model: model.to_string(),
                    registration: registration.to_string(),
                    top_speed_kmh: parse_number(top_speed)?,
                },
                _ => return Err(ParseError::Usage("motorcycle <make> <model> <registration> <top-speed-kmh>")),
            },
            "courier" => match &tokens[1..] {
                [name] => ShellCommand::AddCourier { name: name.to_string() },
                _ => return Err(ParseError::Usage("courier <name>")),
            },
            // Destination may span several words; the weight is the last token
            "order" => match &tokens[1..] {
                [.., _] if tokens.len() >= 3 => ShellCommand::CreateOrder {
                    destination: tokens[1..tokens.len() - 1].join(" "),
                    weight_kg: parse_number(tokens[tokens.len() - 1])?,
                },
                _ => return Err(ParseError::Usage("order <destination> <weight-kg>")),
            },
            "assign" => match &tokens[1..] {
                [courier, registration] => ShellCommand::Assign {
                    courier: courier.to_string(),
                    registration: registration.to_string(),
                },
                _ => return Err(ParseError::Usage("assign <courier-name> <vehicle-registration>")),
            },
            "enqueue" => match &tokens[1..] {
                [courier, order_id] => ShellCommand::Enqueue {
                    courier: courier.to_string(),
                    order_id: order_id
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(order_id.to_string()))?,
                },
                _ => return Err(ParseError::Usage("enqueue <courier-name> <order-id>")),
            },
            "deliver" => match &tokens[1..] {
                [courier] => ShellCommand::Deliver { courier: courier.to_string() },
                _ => return Err(ParseError::Usage("deliver <courier-name>")),
            },
            "state" => ShellCommand::State,
            "export" => ShellCommand::Export,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_number(token: &str) -> Result<f64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_parse_to_none() {
        assert_eq!(ShellCommand::parse("").unwrap(), None);
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
        assert_eq!(ShellCommand::parse("# a comment").unwrap(), None);
    }

    #[test]
    fn test_parse_truck() {
        let cmd = ShellCommand::parse("truck Volvo FH16 AB-123-CD 20").unwrap().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::AddTruck {
                make: "Volvo".into(),
                model: "FH16".into(),
                registration: "AB-123-CD".into(),
                capacity_kg: 20.0,
            }
        );
    }

    #[test]
    fn test_parse_order_with_multi_word_destination() {
        let cmd = ShellCommand::parse("order Le Havre 12.5").unwrap().unwrap();
        assert_eq!(
            cmd,
            ShellCommand::CreateOrder {
                destination: "Le Havre".into(),
                weight_kg: 12.5,
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_numerics() {
        assert_eq!(
            ShellCommand::parse("order Lyon heavy").unwrap_err(),
            ParseError::InvalidNumber("heavy".into())
        );
        assert_eq!(
            ShellCommand::parse("enqueue Alice first").unwrap_err(),
            ParseError::InvalidNumber("first".into())
        );
    }

    #[test]
    fn test_parse_reports_usage_on_missing_operands() {
        assert!(matches!(
            ShellCommand::parse("truck Volvo").unwrap_err(),
            ParseError::Usage(_)
        ));
        assert!(matches!(
            ShellCommand::parse("order Lyon").unwrap_err(),
            ParseError::Usage(_)
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            ShellCommand::parse("teleport Alice").unwrap_err(),
            ParseError::UnknownCommand("teleport".into())
        );
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(ShellCommand::parse("quit").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
    }
}
