//! Energy expenditure protocols
//!
//! Each protocol is an entry in a static descriptor table: identifier,
//! display metadata, category and its compute function. Adding a protocol
//! means adding an entry; nothing downstream changes.
//!
//! Categories matter to consumers: basal and lean-mass protocols expose a
//! basal rate that a PAL multiplier turns into total expenditure, while the
//! energy-requirement family estimates total expenditure directly and has no
//! basal figure at all.

use serde::{Deserialize, Serialize};

use crate::energy::activity::{daily_activity_kcal, ActivityLevel, ExerciseActivity};
use crate::error::{EngineError, EngineResult};
use crate::models::Sex;

/// Identifier of an energy protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolId {
    HarrisBenedict,
    MifflinStJeor,
    FaoWho,
    Cunningham,
    Tinsley,
    EerIom,
}

impl ProtocolId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolId::HarrisBenedict => "harris_benedict",
            ProtocolId::MifflinStJeor => "mifflin_st_jeor",
            ProtocolId::FaoWho => "fao_who",
            ProtocolId::Cunningham => "cunningham",
            ProtocolId::Tinsley => "tinsley",
            ProtocolId::EerIom => "eer_iom",
        }
    }

    /// Parse a protocol identifier. Unknown names are a caller bug, reported
    /// as an error rather than silently skipped.
    pub fn parse(s: &str) -> EngineResult<Self> {
        match s.to_lowercase().as_str() {
            "harris_benedict" | "harris-benedict" => Ok(ProtocolId::HarrisBenedict),
            "mifflin_st_jeor" | "mifflin-st-jeor" | "mifflin" => Ok(ProtocolId::MifflinStJeor),
            "fao_who" | "fao-who" | "fao" => Ok(ProtocolId::FaoWho),
            "cunningham" => Ok(ProtocolId::Cunningham),
            "tinsley" => Ok(ProtocolId::Tinsley),
            "eer_iom" | "eer-iom" | "eer" => Ok(ProtocolId::EerIom),
            other => Err(EngineError::UnknownProtocol(other.to_string())),
        }
    }

    /// Static descriptor for this protocol
    pub fn descriptor(&self) -> &'static ProtocolDescriptor {
        match self {
            ProtocolId::HarrisBenedict => &PROTOCOLS[0],
            ProtocolId::MifflinStJeor => &PROTOCOLS[1],
            ProtocolId::FaoWho => &PROTOCOLS[2],
            ProtocolId::Cunningham => &PROTOCOLS[3],
            ProtocolId::Tinsley => &PROTOCOLS[4],
            ProtocolId::EerIom => &PROTOCOLS[5],
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.descriptor().label
    }
}

/// What kind of estimate a protocol produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolCategory {
    /// Basal rate from weight/height/age, multiplied by a PAL for the total
    Basal,
    /// Basal rate from lean body mass; needs an estimated lean mass
    LeanMass,
    /// Activity-inclusive total with no separate basal figure
    EnergyRequirement,
}

impl ProtocolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolCategory::Basal => "basal",
            ProtocolCategory::LeanMass => "lean_mass",
            ProtocolCategory::EnergyRequirement => "energy_requirement",
        }
    }
}

/// Normalized inputs for the energy protocols
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyInputs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
    /// Lean body mass estimated by the body-composition module, when the
    /// caller has one. The lean-mass protocols yield no basal rate without it.
    pub lean_mass_kg: Option<f64>,
}

impl EnergyInputs {
    fn validate(&self) -> EngineResult<()> {
        if self.weight_kg <= 0.0 {
            return Err(EngineError::non_positive("weight_kg", self.weight_kg));
        }
        if self.height_cm <= 0.0 {
            return Err(EngineError::non_positive("height_cm", self.height_cm));
        }
        if self.age == 0 {
            return Err(EngineError::non_positive("age", 0.0));
        }
        if let Some(lean) = self.lean_mass_kg {
            if lean <= 0.0 {
                return Err(EngineError::non_positive("lean_mass_kg", lean));
            }
        }
        Ok(())
    }
}

/// Basal and total expenditure as computed by one protocol
struct ProtocolOutput {
    bmr: Option<f64>,
    get: Option<f64>,
}

/// Static description of one protocol
pub struct ProtocolDescriptor {
    pub id: ProtocolId,
    pub label: &'static str,
    pub category: ProtocolCategory,
    /// Default choice surfaced by the UI
    pub recommended: bool,
    /// Intended for athletic populations
    pub athlete_oriented: bool,
    compute: fn(&EnergyInputs, ActivityLevel) -> ProtocolOutput,
}

static PROTOCOLS: [ProtocolDescriptor; 6] = [
    ProtocolDescriptor {
        id: ProtocolId::HarrisBenedict,
        label: "Harris-Benedict",
        category: ProtocolCategory::Basal,
        recommended: false,
        athlete_oriented: false,
        compute: harris_benedict,
    },
    ProtocolDescriptor {
        id: ProtocolId::MifflinStJeor,
        label: "Mifflin-St Jeor",
        category: ProtocolCategory::Basal,
        recommended: true,
        athlete_oriented: false,
        compute: mifflin_st_jeor,
    },
    ProtocolDescriptor {
        id: ProtocolId::FaoWho,
        label: "FAO/WHO",
        category: ProtocolCategory::Basal,
        recommended: false,
        athlete_oriented: false,
        compute: fao_who,
    },
    ProtocolDescriptor {
        id: ProtocolId::Cunningham,
        label: "Cunningham",
        category: ProtocolCategory::LeanMass,
        recommended: false,
        athlete_oriented: true,
        compute: cunningham,
    },
    ProtocolDescriptor {
        id: ProtocolId::Tinsley,
        label: "Tinsley",
        category: ProtocolCategory::LeanMass,
        recommended: false,
        athlete_oriented: true,
        compute: tinsley,
    },
    ProtocolDescriptor {
        id: ProtocolId::EerIom,
        label: "EER (IOM)",
        category: ProtocolCategory::EnergyRequirement,
        recommended: false,
        athlete_oriented: false,
        compute: eer_iom,
    },
];

/// All registered protocols, in display order
pub fn all_protocols() -> &'static [ProtocolDescriptor] {
    &PROTOCOLS
}

/// Result of evaluating one protocol for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProtocolResult {
    pub protocol: ProtocolId,
    /// The protocol's category; energy-requirement results legitimately
    /// carry no basal rate
    pub category: ProtocolCategory,
    /// Basal rate; None for the energy-requirement category and for
    /// lean-mass protocols called without a lean mass
    pub bmr: Option<f64>,
    /// Total daily expenditure; None whenever it cannot be derived
    pub get: Option<f64>,
    /// The PAL multiplier the total was computed with
    pub activity_factor: f64,
    /// GET plus the daily average of the selected exercises, when any
    pub get_with_activities: Option<f64>,
    /// The same protocol re-evaluated at the prescription target weight,
    /// kept apart from the base figures
    pub target_weight_get: Option<f64>,
}

/// Evaluate one protocol.
pub fn compute_protocol(
    id: ProtocolId,
    inputs: &EnergyInputs,
    level: ActivityLevel,
) -> EngineResult<EnergyProtocolResult> {
    compute_protocol_full(id, inputs, level, &[], None)
}

/// Evaluate one protocol with the optional additions: a list of selected
/// exercises added on top of GET, and a target-weight re-evaluation for
/// goal-directed prescribing.
pub fn compute_protocol_full(
    id: ProtocolId,
    inputs: &EnergyInputs,
    level: ActivityLevel,
    activities: &[ExerciseActivity],
    target_weight_kg: Option<f64>,
) -> EngineResult<EnergyProtocolResult> {
    inputs.validate()?;
    if let Some(tw) = target_weight_kg {
        if tw <= 0.0 {
            return Err(EngineError::non_positive("target_weight_kg", tw));
        }
    }

    let descriptor = id.descriptor();
    let out = (descriptor.compute)(inputs, level);

    let get_with_activities = match out.get {
        Some(get) if !activities.is_empty() => {
            Some(get + daily_activity_kcal(activities, inputs.weight_kg))
        }
        _ => None,
    };

    let target_weight_get = target_weight_kg.and_then(|tw| {
        let adjusted = EnergyInputs {
            weight_kg: tw,
            ..*inputs
        };
        (descriptor.compute)(&adjusted, level).get
    });

    Ok(EnergyProtocolResult {
        protocol: id,
        category: descriptor.category,
        bmr: out.bmr,
        get: out.get,
        activity_factor: level.pal(),
        get_with_activities,
        target_weight_get,
    })
}

/// Package a basal rate with its PAL-multiplied total.
fn basal(bmr: f64, level: ActivityLevel) -> ProtocolOutput {
    ProtocolOutput {
        bmr: Some(bmr),
        get: Some(bmr * level.pal()),
    }
}

fn harris_benedict(i: &EnergyInputs, level: ActivityLevel) -> ProtocolOutput {
    let age = f64::from(i.age);
    let bmr = match i.sex {
        Sex::Male => 66.5 + 13.75 * i.weight_kg + 5.003 * i.height_cm - 6.755 * age,
        Sex::Female => 655.1 + 9.563 * i.weight_kg + 1.850 * i.height_cm - 4.676 * age,
    };
    basal(bmr, level)
}

fn mifflin_st_jeor(i: &EnergyInputs, level: ActivityLevel) -> ProtocolOutput {
    let age = f64::from(i.age);
    let base = 10.0 * i.weight_kg + 6.25 * i.height_cm - 5.0 * age;
    let bmr = match i.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    basal(bmr, level)
}

/// FAO/WHO weight-based equations by age band. Ages under 10 are outside the
/// bands this engine carries, so no basal rate is produced for them.
fn fao_who(i: &EnergyInputs, level: ActivityLevel) -> ProtocolOutput {
    let w = i.weight_kg;
    let bmr = match (i.sex, i.age) {
        (_, 0..=9) => {
            return ProtocolOutput {
                bmr: None,
                get: None,
            }
        }
        (Sex::Male, 10..=17) => 17.5 * w + 651.0,
        (Sex::Male, 18..=29) => 15.3 * w + 679.0,
        (Sex::Male, 30..=59) => 11.6 * w + 879.0,
        (Sex::Male, _) => 13.5 * w + 487.0,
        (Sex::Female, 10..=17) => 12.2 * w + 746.0,
        (Sex::Female, 18..=29) => 14.7 * w + 496.0,
        (Sex::Female, 30..=59) => 8.7 * w + 829.0,
        (Sex::Female, _) => 10.5 * w + 596.0,
    };
    basal(bmr, level)
}

fn cunningham(i: &EnergyInputs, level: ActivityLevel) -> ProtocolOutput {
    match i.lean_mass_kg {
        Some(lean) => basal(500.0 + 22.0 * lean, level),
        None => ProtocolOutput {
            bmr: None,
            get: None,
        },
    }
}

fn tinsley(i: &EnergyInputs, level: ActivityLevel) -> ProtocolOutput {
    match i.lean_mass_kg {
        Some(lean) => basal(25.9 * lean + 284.0, level),
        None => ProtocolOutput {
            bmr: None,
            get: None,
        },
    }
}

/// IOM estimated energy requirement: activity-inclusive, no basal figure.
fn eer_iom(i: &EnergyInputs, level: ActivityLevel) -> ProtocolOutput {
    let age = f64::from(i.age);
    let height_m = i.height_cm / 100.0;
    let pa = level.eer_pa(i.sex);
    let eer = match i.sex {
        Sex::Male => 662.0 - 9.53 * age + pa * (15.91 * i.weight_kg + 539.6 * height_m),
        Sex::Female => 354.0 - 6.91 * age + pa * (9.36 * i.weight_kg + 726.0 * height_m),
    };
    ProtocolOutput {
        bmr: None,
        get: Some(eer),
    }
}
