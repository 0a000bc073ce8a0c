use crate::error::FuelError;
use crate::raw_input::RawValue;

/// What the vehicle does at a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Launch,
    Land,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::Launch, Action::Land]
    }

    /// Symbol name used by callers (`launch` / `land`)
    pub fn symbol(&self) -> &'static str {
        match self {
            Action::Launch => "launch",
            Action::Land => "land",
        }
    }

    pub fn from_symbol(name: &str) -> Option<Action> {
        Action::all().iter().copied().find(|a| a.symbol() == name)
    }
}

/// Only the exact symbols `launch` and `land` are actions; strings,
/// nil and other kinds are rejected.
impl TryFrom<&RawValue> for Action {
    type Error = ();

    fn try_from(value: &RawValue) -> Result<Self, Self::Error> {
        match value {
            RawValue::Symbol(name) => Action::from_symbol(name).ok_or(()),
            _ => Err(()),
        }
    }
}

/// One leg of a flight
#[derive(Debug, Clone, PartialEq)]
pub struct FlightStep {
    pub action: Action,
    /// Body name as supplied (casing preserved)
    pub body: String,
}

impl FlightStep {
    pub fn new(action: Action, body: &str) -> Self {
        Self {
            action,
            body: body.to_string(),
        }
    }

    pub fn launch(body: &str) -> Self {
        Self::new(Action::Launch, body)
    }

    pub fn land(body: &str) -> Self {
        Self::new(Action::Land, body)
    }
}

/// Ordered legs of a flight, in chronological order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlightPath {
    pub steps: Vec<FlightStep>,
}

impl FlightPath {
    pub fn new(steps: Vec<FlightStep>) -> Self {
        Self { steps }
    }

    /// Convert an already-validated raw list into strict steps.
    ///
    /// Any entry that still fails to parse is reported with the same error
    /// the validator would give, so this is safe to call on unchecked input
    /// as well; it just won't check body names against the registry.
    pub fn from_raw(raw: &RawValue) -> Result<Self, FuelError> {
        let entries = match raw.as_list() {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(FuelError::InvalidFlightPath),
        };

        let steps = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (action, body) = entry.as_step_pair();
                let action = Action::try_from(action)
                    .map_err(|_| FuelError::InvalidAction { step: i + 1 })?;
                match body {
                    RawValue::Str(name) => Ok(FlightStep::new(action, name)),
                    other => Err(FuelError::UnknownGravity {
                        planet: other.to_string(),
                        step: i + 1,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }

    /// Raw form of this path, as a caller would pass it in
    pub fn to_raw(&self) -> RawValue {
        RawValue::List(
            self.steps
                .iter()
                .map(|s| RawValue::step(RawValue::symbol(s.action.symbol()), RawValue::str(&s.body)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
