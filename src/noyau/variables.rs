// src/noyau/variables.rs
//
// Jeu de variables : une valeur par lettre ASCII (A-Z puis a-z, 52 cases).
// Le domaine est fermé, donc stockage par arène + indice, sans croissance.
// La validation de la lettre se fait ici, à la frontière : aucune entrée
// invalide ne peut atteindre une mauvaise case.

/// Nombre total de cases (majuscules + minuscules).
pub const TAILLE_JEU: usize = 52;

const MOITIE_JEU: usize = TAILLE_JEU / 2;

/// Lettre -> indice : A-Z occupe 0..26, a-z occupe 26..52.
fn lettre_vers_indice(lettre: char) -> Option<usize> {
    if lettre.is_ascii_uppercase() {
        Some(lettre as usize - 'A' as usize)
    } else if lettre.is_ascii_lowercase() {
        Some(lettre as usize - 'a' as usize + MOITIE_JEU)
    } else {
        None
    }
}

/// Variables d'une session. Créé vide, écrit seulement par la commande
/// `let`, lu (jamais modifié) pendant chaque évaluation.
#[derive(Clone, Debug)]
pub struct JeuVariables {
    valeurs: [f64; TAILLE_JEU],
    presentes: [bool; TAILLE_JEU],
}

impl Default for JeuVariables {
    fn default() -> Self {
        Self {
            valeurs: [0.0; TAILLE_JEU],
            presentes: [false; TAILLE_JEU],
        }
    }
}

impl JeuVariables {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /// Valeur liée à la lettre, si elle existe.
    pub fn obtenir(&self, lettre: char) -> Option<f64> {
        let indice = lettre_vers_indice(lettre)?;
        if self.presentes[indice] {
            Some(self.valeurs[indice])
        } else {
            None
        }
    }

    /// Lie la lettre à la valeur. Rend false si `lettre` n'est pas une
    /// lettre ASCII (rien n'est écrit dans ce cas).
    pub fn definir(&mut self, lettre: char, valeur: f64) -> bool {
        match lettre_vers_indice(lettre) {
            Some(indice) => {
                self.valeurs[indice] = valeur;
                self.presentes[indice] = true;
                true
            }
            None => false,
        }
    }

    /// Nombre de lettres liées (utilitaire d'inspection).
    pub fn nombre_liees(&self) -> usize {
        self.presentes.iter().filter(|p| **p).count()
    }
}
