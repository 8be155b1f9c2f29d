//! # Cadence CLI Application
//!
//! Terminal front end for the watch component design calculators.
//! Prompts for the numbers on the worksheet, prints a boxed summary,
//! then emits the result as JSON for downstream tooling.

use std::io::{self, BufRead, Write};

use cadence_core::calculations::arbor::{self, ArborInput};
use cadence_core::calculations::hairspring::{self, HairspringInput};
use cadence_core::calculations::mainspring::{self, MainspringInput, MainspringMaterial};
use cadence_core::calculations::ratio::{self, RatioSearchInput};
use cadence_core::units::{BeatsPerHour, Hertz};
use cadence_core::CalcError;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_choice(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Cadence CLI - Watch Component Design Calculator");
    println!("===============================================");
    println!();
    println!("Calculations:");
    println!("  1) Hairspring stiffness (NIHS 35-10 match)");
    println!("  2) Mainspring dimensions");
    println!("  3) Barrel arbor diameter (NIHS 11-02)");
    println!("  4) Gear-ratio divisor search");
    println!();

    match prompt_choice("Select calculation [1]: ", 1) {
        2 => run_mainspring(),
        3 => run_arbor(),
        4 => run_ratio_search(),
        _ => run_hairspring(),
    }
}

fn run_hairspring() {
    println!();
    // Watchmakers quote beat rate in vph; the calculation wants Hz.
    let beat_rate = BeatsPerHour(prompt_f64("Beat rate (vph) [28800]: ", 28_800.0));
    let input = HairspringInput {
        label: "CLI".to_string(),
        balance_inertia_mg_cm2: prompt_f64("Balance inertia I (mg.cm2) [12.5]: ", 12.5),
        outer_diameter_mm: prompt_f64("Hairspring outer diameter D (mm) [6.0]: ", 6.0),
        inner_diameter_mm: prompt_f64("Collet diameter d (mm) [1.3]: ", 1.3),
        frequency_hz: Hertz::from(beat_rate).value(),
    };

    match hairspring::calculate(&input) {
        Ok(result) => {
            println!();
            println!("=======================================");
            println!("  HAIRSPRING STIFFNESS RESULTS");
            println!("=======================================");
            println!();
            println!("Input:");
            println!("  I = {} mg.cm2", input.balance_inertia_mg_cm2);
            println!(
                "  D = {} mm, d = {} mm",
                input.outer_diameter_mm, input.inner_diameter_mm
            );
            println!(
                "  f = {} Hz ({:.0} vph)",
                input.frequency_hz,
                input.beat_rate_vph()
            );
            println!();
            println!("Results:");
            println!("  Elastic torque M:  {:.2} mg.cm2.s-2/rad", result.elastic_torque);
            println!("  Stiffness K:       {:.2} dyne.cm2/rad", result.stiffness_dyne_cm2);
            println!(
                "  K (table units):   {:.4} x10-2 N.mm3/rad",
                result.stiffness_table_units
            );
            println!(
                "  NIHS 35-10 match:  {} x10-2 N.mm3/rad ({:+.1}% off standard)",
                result.nihs_standard_stiffness,
                result.deviation_from_standard() * 100.0
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_mainspring() {
    println!();
    println!("Material: 1) Elinvar  2) 1095 carbon steel  3) Nivaflex");
    let material = match prompt_choice("Select material [3]: ", 3) {
        1 => MainspringMaterial::Elinvar,
        2 => MainspringMaterial::CarbonSteel1095,
        _ => MainspringMaterial::Nivaflex,
    };

    let input = MainspringInput {
        label: "CLI".to_string(),
        barrel_inner_diameter_mm: prompt_f64("Barrel inner diameter (mm) [11.6]: ", 11.6),
        barrel_depth_mm: prompt_f64("Barrel depth (mm) [1.63]: ", 1.63),
        lid_thickness_mm: prompt_f64("Lid thickness (mm) [0.2]: ", 0.2),
        power_reserve_hours: prompt_f64("Power reserve (hours) [72]: ", 72.0),
        material,
        round_decimals: 2,
    };

    match mainspring::calculate(&input) {
        Ok(result) => {
            println!();
            println!("=======================================");
            println!("  MAINSPRING DIMENSIONS");
            println!("=======================================");
            println!();
            println!("Material: {} (factor {})", input.material, input.material.factor());
            println!();
            println!("  Thickness: {} mm", result.thickness_mm);
            println!("  Length:    {} mm", result.length_mm);
            println!("  Width:     {} mm", result.width_mm);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_arbor() {
    println!();
    let input = ArborInput {
        label: "CLI".to_string(),
        mainspring_thickness_mm: prompt_f64("Mainspring thickness e1 (mm) [0.13]: ", 0.13),
    };

    match arbor::calculate(&input) {
        Ok(result) => {
            println!();
            println!("=======================================");
            println!("  BARREL ARBOR DIAMETER");
            println!("=======================================");
            println!();
            println!("  21 x e1:          {} mm", result.raw_diameter_mm);
            println!("  NIHS 11-02 size:  {} mm", result.arbor_diameter_mm);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_ratio_search() {
    println!();
    let input = RatioSearchInput {
        label: "CLI".to_string(),
        divisor_min: prompt_f64("Divisor range start [4.0]: ", 4.0),
        divisor_max: prompt_f64("Divisor range end [20.0]: ", 20.0),
        target: prompt_f64("Target value [60.0]: ", 60.0),
        increment: prompt_f64("Increment [0.01]: ", 0.01),
        round_decimals: 3,
    };

    match ratio::calculate(&input) {
        Ok(result) => {
            println!();
            println!("=======================================");
            println!("  GEAR-RATIO DIVISOR SEARCH");
            println!("=======================================");
            println!();
            if result.has_matches() {
                for m in &result.matches {
                    println!("  {} / {} = {}", input.target, m.divisor, m.quotient);
                }
            } else {
                println!("  No integer quotients in range.");
            }
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn print_json<T: serde::Serialize>(result: &T) {
    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
