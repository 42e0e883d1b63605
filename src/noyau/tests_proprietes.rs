//! Propriétés (proptest) : littéraux numériques.

use proptest::prelude::*;

use super::erreur::ErreurEval;
use super::jetons::Jeton;
use super::lecture::balayer;

proptest! {
    /// Aller-retour : balayer un littéral redonne exactement la valeur que
    /// le texte représente (à la précision du flottant près, c'est-à-dire
    /// la même valeur que le parse standard du même texte).
    #[test]
    fn litteral_decimal_aller_retour(entier in 0u64..1_000_000_000, frac in 0u32..1_000_000) {
        let texte = format!("{entier}.{frac}");
        let attendu: f64 = texte.parse().unwrap();

        let suite = balayer(&texte).unwrap();
        prop_assert_eq!(suite.jetons(), &[Jeton::Nombre(attendu)][..]);
    }

    #[test]
    fn litteral_entier_aller_retour(entier in 0u64..1_000_000_000_000) {
        let texte = format!("{entier}");
        let attendu: f64 = texte.parse().unwrap();

        let suite = balayer(&texte).unwrap();
        prop_assert_eq!(suite.jetons(), &[Jeton::Nombre(attendu)][..]);
    }

    /// Deux points décimaux : toujours FormatNombre, jamais une valeur fausse.
    #[test]
    fn deux_points_toujours_en_erreur(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let texte = format!("{a}.{b}.{c}");
        prop_assert_eq!(balayer(&texte), Err(ErreurEval::FormatNombre));
    }
}
