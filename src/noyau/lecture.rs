// src/noyau/lecture.rs
//
// Balayage : chaîne -> suite de jetons
// ------------------------------------
// Une seule passe de gauche à droite, position strictement croissante.
// À chaque position, dans cet ordre (le premier match gagne) :
// 1. espaces ignorés
// 2. opérateurs + - * / ^ : un jeton par caractère ("+-" donne deux jetons)
// 3. chiffre : lecture d'un nombre (chiffres, puis '.' + chiffres en option)
// 4. parenthèses ( )
// 5. table des fonctions (sin, cos, tan, arcsin, arccos, arctan, log, ln)
// 6. table des constantes (pi, e) -> repliées en Nombre dès le balayage
// 7. lettre ASCII seule -> Variable
// 8. tout autre caractère : erreur, balayage abandonné
//
// NOTE: l'ordre 5/6/7 résout l'ambiguïté entre "sin", "e" et une variable
// "x", qui sont tous des suites de lettres.

use std::f64::consts::{E, PI};

use super::erreur::ErreurEval;
use super::jetons::{Fonction, Jeton, SuiteJetons};

/// Table fixe des fonctions, sondée dans cet ordre.
const TABLE_FONCTIONS: [(&str, Fonction); 8] = [
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("arcsin", Fonction::ArcSin),
    ("arccos", Fonction::ArcCos),
    ("arctan", Fonction::ArcTan),
    ("log", Fonction::Log10),
    ("ln", Fonction::LogNaturel),
];

/// Table fixe des constantes nommées.
const TABLE_CONSTANTES: [(&str, f64); 2] = [("pi", PI), ("e", E)];

/// Curseur de lecture sur la chaîne d'entrée.
struct LecteurChaine {
    chars: Vec<char>,
    pos: usize,
}

impl LecteurChaine {
    fn nouveau(texte: &str) -> Self {
        Self {
            chars: texte.chars().collect(),
            pos: 0,
        }
    }

    fn courant(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn avancer(&mut self) {
        self.pos += 1;
    }

    fn avancer_de(&mut self, n: usize) {
        self.pos += n;
    }

    /// `mot` est-il présent au curseur ? (tables ASCII seulement)
    fn mot_present(&self, mot: &str) -> bool {
        let mut i = self.pos;
        for attendu in mot.chars() {
            match self.chars.get(i) {
                Some(&c) if c == attendu => i += 1,
                _ => return false,
            }
        }
        true
    }
}

/// Balaye `texte` en une suite bornée de jetons.
///
/// Première erreur rencontrée = arrêt immédiat, rien n'est rattrapé.
pub fn balayer(texte: &str) -> Result<SuiteJetons, ErreurEval> {
    let mut lecteur = LecteurChaine::nouveau(texte);
    let mut suite = SuiteJetons::nouvelle();

    while let Some(c) = lecteur.courant() {
        if c.is_whitespace() {
            lecteur.avancer();
            continue;
        }

        if "+-*/^".contains(c) {
            suite.ajouter(Jeton::Operateur(c))?;
            lecteur.avancer();
            continue;
        }

        if c.is_ascii_digit() {
            let valeur = lire_nombre(&mut lecteur)?;
            suite.ajouter(Jeton::Nombre(valeur))?;
            continue;
        }

        if c == '(' {
            suite.ajouter(Jeton::ParGauche)?;
            lecteur.avancer();
            continue;
        }
        if c == ')' {
            suite.ajouter(Jeton::ParDroite)?;
            lecteur.avancer();
            continue;
        }

        if let Some(fonction) = lire_fonction(&mut lecteur) {
            suite.ajouter(Jeton::Fonction(fonction))?;
            continue;
        }

        if let Some(valeur) = lire_constante(&mut lecteur) {
            suite.ajouter(Jeton::Nombre(valeur))?;
            continue;
        }

        if c.is_ascii_alphabetic() {
            suite.ajouter(Jeton::Variable(c))?;
            lecteur.avancer();
            continue;
        }

        // caractère hors alphabet : on s'arrête net
        return Err(ErreurEval::JetonInattendu);
    }

    Ok(suite)
}

/// Lit un nombre : chiffres, puis en option '.' et d'autres chiffres.
/// Deux points décimaux dans un même littéral = FormatNombre.
/// Le chiffre de tête est obligatoire (".5" n'est pas un nombre ici).
fn lire_nombre(lecteur: &mut LecteurChaine) -> Result<f64, ErreurEval> {
    let debut = lecteur.pos;

    while let Some(c) = lecteur.courant() {
        if c.is_ascii_digit() {
            lecteur.avancer();
        } else {
            break;
        }
    }

    if lecteur.courant() == Some('.') {
        lecteur.avancer();
        while let Some(c) = lecteur.courant() {
            if c.is_ascii_digit() {
                lecteur.avancer();
            } else {
                break;
            }
        }
        // un second point collé à la partie décimale
        if lecteur.courant() == Some('.') {
            return Err(ErreurEval::FormatNombre);
        }
    }

    let litteral: String = lecteur.chars[debut..lecteur.pos].iter().collect();
    litteral.parse::<f64>().map_err(|_| ErreurEval::FormatNombre)
}

fn lire_fonction(lecteur: &mut LecteurChaine) -> Option<Fonction> {
    for (nom, fonction) in TABLE_FONCTIONS {
        if lecteur.mot_present(nom) {
            lecteur.avancer_de(nom.len());
            return Some(fonction);
        }
    }
    None
}

fn lire_constante(lecteur: &mut LecteurChaine) -> Option<f64> {
    for (nom, valeur) in TABLE_CONSTANTES {
        if lecteur.mot_present(nom) {
            lecteur.avancer_de(nom.len());
            return Some(valeur);
        }
    }
    None
}
