use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::fluid::calculator::FluidSummary;
use crate::models::{BrineParameters, Fluid, FluidKind, OilParameters, ValidationMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Batzle & Wang fluid property calculator (brine, oil)", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(long, help = "Reject parameters outside the correlation ranges")]
    strict: bool,
    #[arg(long, value_enum, default_value_t = FluidKind::Brine)]
    fluid: FluidKind,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON document {\"fluid\": ..., \"parameters\": ...}; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON parameters for --fluid (overrides --input)"
    )]
    params_json: Option<String>,
    #[arg(long, value_name = "DEG_C", allow_negative_numbers = true)]
    temperature: Option<f64>,
    #[arg(long, value_name = "MPA", allow_negative_numbers = true)]
    pressure: Option<f64>,
    #[arg(long, value_name = "L_PER_L", allow_negative_numbers = true)]
    solution_gas_ratio: Option<f64>,
    #[arg(long, help = "Treat the fluid as gas-saturated")]
    live: bool,
    #[arg(long, value_name = "FRACTION", help = "Brine only")]
    salinity: Option<f64>,
    #[arg(long, value_name = "DEG_API", help = "Oil only")]
    api_gravity: Option<f64>,
    #[arg(long, value_name = "SG", help = "Oil only", allow_negative_numbers = true)]
    gas_gravity: Option<f64>,
}

impl Args {
    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        }
    }
}

fn parse_inline_params(kind: FluidKind, params_json: &str) -> Result<Fluid, AppError> {
    let fluid = match kind {
        FluidKind::Brine => serde_json::from_str::<BrineParameters>(params_json).map(Fluid::Brine),
        FluidKind::Oil => serde_json::from_str::<OilParameters>(params_json).map(Fluid::Oil),
    };
    fluid.map_err(|source| AppError::ParseParamsJson { source })
}

fn parse_input_doc(doc: &str) -> Result<Fluid, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseInputJson { source })
}

fn load_fluid(args: &Args) -> Result<Fluid, AppError> {
    match (&args.params_json, &args.input) {
        (Some(params_json), _) => parse_inline_params(args.fluid, params_json),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_input_doc(&s)
        }
        (None, None) => Ok(Fluid::with_defaults(args.fluid)),
    }
}

fn apply_overrides(fluid: &mut Fluid, args: &Args) -> Result<(), AppError> {
    if let Some(t) = args.temperature {
        fluid.set_temperature(t);
    }
    if let Some(p) = args.pressure {
        fluid.set_pressure(p);
    }
    if let Some(rg) = args.solution_gas_ratio {
        fluid.set_solution_gas_ratio(rg);
    }
    if args.live {
        fluid.set_live(true);
    }

    let kind = fluid.kind();
    match fluid {
        Fluid::Brine(b) => {
            if let Some(s) = args.salinity {
                b.salinity = s;
            }
            if args.api_gravity.is_some() {
                return Err(AppError::InapplicableOption {
                    option: "api-gravity",
                    fluid: kind,
                });
            }
            if args.gas_gravity.is_some() {
                return Err(AppError::InapplicableOption {
                    option: "gas-gravity",
                    fluid: kind,
                });
            }
        }
        Fluid::Oil(o) => {
            if args.salinity.is_some() {
                return Err(AppError::InapplicableOption {
                    option: "salinity",
                    fluid: kind,
                });
            }
            if let Some(api) = args.api_gravity {
                o.api_gravity = api;
            }
            if let Some(g) = args.gas_gravity {
                o.gas_gravity = g;
            }
        }
    }
    Ok(())
}

/// Resolve the fluid from JSON sources or defaults, then apply flag overrides.
pub fn parse_inputs(args: &Args) -> Result<Fluid, AppError> {
    let mut fluid = load_fluid(args)?;
    apply_overrides(&mut fluid, args)?;
    Ok(fluid)
}

pub fn print_output(out: &FluidSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("Fluid: {}{}", out.fluid, if out.live { " (live)" } else { "" });
        println!("Bulk Modulus: {:.4} GPa", out.bulk_modulus_gpa);
        println!("Density: {:.4} g/cc", out.density_g_cc);
        println!("P-wave Velocity: {:.2} m/s", out.compressional_velocity_m_s);
        println!("Viscosity: {:.4} cP", out.viscosity_cp);
        if let Some(bo) = out.formation_volume_factor {
            println!("Formation Volume Factor: {:.4}", bo);
        }
    }

    Ok(())
}
