// src/main.rs
//
// Calculatrice réelle — point d'entrée
// ------------------------------------
// - sans argument : invite interactive (une ligne à la fois, EOF = sortie)
// - avec arguments : chaque argument est évalué comme une expression
// - RUST_LOG=debug pour suivre le balayage et l'évaluation

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod noyau;

use cli::Session;
use noyau::ModeAngle;

/// Calculatrice en ligne de commande : arithmétique, fonctions
/// trigonométriques et logarithmes, constantes (pi, e), variables d'une
/// lettre portées sur toute la session.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Expressions à évaluer directement (sinon : invite interactive).
    expressions: Vec<String>,

    /// Mode d'angle au démarrage (rad ou deg).
    #[arg(long, default_value = "rad")]
    angle: String,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut session = Session::nouvelle();
    match ModeAngle::depuis_nom(&args.angle) {
        Some(mode) => session.reglages.mode_angle = mode,
        None => {
            eprintln!(
                "mode d'angle inconnu : {} (attendu : rad ou deg)",
                args.angle
            );
            std::process::exit(2);
        }
    }

    if args.expressions.is_empty() {
        cli::invite::lancer(&mut session)
    } else {
        cli::invite::evaluer_tout(&args.expressions, &session);
        Ok(())
    }
}
