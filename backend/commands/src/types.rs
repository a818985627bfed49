/// Slash command types.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use gwscan_core::ValidationError;

// ---------------------------------------------------------------------------
// Arg
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    String,
    Integer,
}

impl ArgType {
    /// Discord application-command option type code.
    pub fn option_type(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandArg {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    pub required: bool,
    /// Permitted literal values; empty means unrestricted.
    pub choices: Vec<String>,
}

impl CommandArg {
    pub fn string(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            arg_type: ArgType::String,
            required: false,
            choices: vec![],
        }
    }

    pub fn integer(name: &str, description: &str) -> Self {
        Self { arg_type: ArgType::Integer, ..Self::string(name, description) }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn choices(mut self, choices: &[&str]) -> Self {
        self.choices = choices.iter().map(|s| s.to_string()).collect();
        self
    }
}

// ---------------------------------------------------------------------------
// Command definition
// ---------------------------------------------------------------------------

/// Name, description and declared arguments of a command. This is all the
/// platform registration step needs to know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDef {
    pub name: String,
    pub description: String,
    pub args: Vec<CommandArg>,
}

impl CommandDef {
    pub fn new(name: &str, description: &str) -> Self {
        Self { name: name.to_string(), description: description.to_string(), args: vec![] }
    }

    pub fn arg(mut self, arg: CommandArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Validate an invocation's raw values against the declared arguments.
    ///
    /// Blank values count as missing. Undeclared names are dropped.
    pub fn extract_args(&self, inv: &CommandInvocation) -> Result<CommandArgs, ValidationError> {
        let mut values = HashMap::new();
        for arg in &self.args {
            let value = inv
                .args
                .get(&arg.name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty());

            let Some(value) = value else {
                if arg.required {
                    return Err(ValidationError::MissingArgument(arg.name.clone()));
                }
                continue;
            };

            if !arg.choices.is_empty() && !arg.choices.iter().any(|c| c == value) {
                return Err(ValidationError::InvalidChoice {
                    name: arg.name.clone(),
                    value: value.to_string(),
                    allowed: arg.choices.clone(),
                });
            }

            if arg.arg_type == ArgType::Integer && value.parse::<i64>().is_err() {
                return Err(ValidationError::InvalidType {
                    name: arg.name.clone(),
                    value: value.to_string(),
                    expected: "an integer",
                });
            }

            values.insert(arg.name.clone(), value.to_string());
        }
        Ok(CommandArgs(values))
    }
}

// ---------------------------------------------------------------------------
// Parsed invocation
// ---------------------------------------------------------------------------

/// A structured command request as delivered by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct CommandInvocation {
    pub name: String,
    pub args: HashMap<String, String>,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), args: HashMap::new() }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }
}

/// Arguments that passed validation, keyed by declared name.
#[derive(Debug, Clone, Default)]
pub struct CommandArgs(HashMap<String, String>);

impl CommandArgs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// A value the command declared as required.
    pub fn require(&self, name: &str) -> Result<&str, ValidationError> {
        self.get(name)
            .ok_or_else(|| ValidationError::MissingArgument(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Registration schema
// ---------------------------------------------------------------------------

/// Static description of a command in Discord's application-command shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSchema {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSchema {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceSchema {
    pub name: String,
    pub value: String,
}

impl From<&CommandDef> for CommandSchema {
    fn from(def: &CommandDef) -> Self {
        Self {
            name: def.name.clone(),
            description: def.description.clone(),
            options: def
                .args
                .iter()
                .map(|arg| OptionSchema {
                    kind: arg.arg_type.option_type(),
                    name: arg.name.clone(),
                    description: arg.description.clone(),
                    required: arg.required,
                    choices: arg
                        .choices
                        .iter()
                        .map(|c| ChoiceSchema { name: c.clone(), value: c.clone() })
                        .collect(),
                })
                .collect(),
        }
    }
}
