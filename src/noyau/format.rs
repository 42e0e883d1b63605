// src/noyau/format.rs

use super::reglages::ModeSortie;

/* ------------------------ Affichage des valeurs ------------------------ */

/// Formate une valeur selon le mode de sortie de la session.
/// - normal        : affichage le plus court qui re-parse à l'identique
/// - scientifique  : mantisse + exposant (m × 10^e, 1 <= |m| < 10)
/// - ingénieur     : exposant ramené à un multiple de 3
pub fn format_valeur(valeur: f64, mode: ModeSortie) -> String {
    match mode {
        ModeSortie::Normal => format!("{valeur}"),
        ModeSortie::Scientifique => format_scientifique(valeur),
        ModeSortie::Ingenieur => format_ingenieur(valeur),
    }
}

fn format_scientifique(valeur: f64) -> String {
    if !valeur.is_finite() {
        return format!("{valeur}");
    }
    format!("{valeur:e}")
}

fn format_ingenieur(valeur: f64) -> String {
    if !valeur.is_finite() || valeur == 0.0 {
        return format!("{valeur}");
    }

    let exposant = valeur.abs().log10().floor() as i32;
    // div_euclid : -2 -> -3, pas 0 (l'exposant descend toujours)
    let exposant3 = exposant.div_euclid(3) * 3;
    let mantisse = valeur / 10f64.powi(exposant3);

    format!("{mantisse}e{exposant3}")
}
