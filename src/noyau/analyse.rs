// src/noyau/analyse.rs
//
// Descente récursive, un étage par niveau de précédence, le plus faible à
// l'appel le plus externe :
//
//   addsub  := multdiv ( ('+'|'-') multdiv )*
//   multdiv := puiss   ( ('*'|'/') puiss )*
//   puiss   := fonc    ( '^' fonc )*
//   fonc    := FONCTION fonc | atome
//   atome   := NOMBRE | VARIABLE | '(' addsub ')'
//
// L'évaluation se fait pendant l'analyse : chaque étage rend la valeur du
// sous-arbre qu'il vient de consommer, aucun AST n'est construit.
// Première erreur = abandon immédiat, remontée à travers tous les étages.

use super::erreur::ErreurEval;
use super::jetons::{Fonction, Jeton};
use super::reglages::Reglages;
use super::variables::JeuVariables;

/// Analyse et évalue une suite complète de jetons.
///
/// La suite entière doit être consommée : un reste après l'expression est
/// un `JetonInattendu` (pas de résultat partiel).
pub fn analyser_jetons(
    jetons: &[Jeton],
    variables: &JeuVariables,
    reglages: &Reglages,
) -> Result<f64, ErreurEval> {
    let mut analyseur = Analyseur {
        jetons,
        pos: 0,
        variables,
        reglages,
    };

    let valeur = analyseur.addsub()?;

    if analyseur.pos != jetons.len() {
        return Err(ErreurEval::JetonInattendu);
    }
    Ok(valeur)
}

/// Curseur unique sur la suite de jetons, avec accès lecture seule aux
/// variables et aux réglages le temps de l'appel.
struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
    variables: &'a JeuVariables,
    reglages: &'a Reglages,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<Jeton> {
        self.jetons.get(self.pos).copied()
    }

    fn avancer(&mut self) {
        self.pos += 1;
    }

    fn addsub(&mut self) -> Result<f64, ErreurEval> {
        let mut valeur = self.multdiv()?;
        while let Some(Jeton::Operateur(op @ ('+' | '-'))) = self.courant() {
            self.avancer();
            let droite = self.multdiv()?;
            if op == '+' {
                valeur += droite;
            } else {
                valeur -= droite;
            }
        }
        Ok(valeur)
    }

    fn multdiv(&mut self) -> Result<f64, ErreurEval> {
        let mut valeur = self.puiss()?;
        while let Some(Jeton::Operateur(op @ ('*' | '/'))) = self.courant() {
            self.avancer();
            let droite = self.puiss()?;
            // division par zéro : sémantique IEEE-754 (inf/NaN), pas une erreur
            if op == '*' {
                valeur *= droite;
            } else {
                valeur /= droite;
            }
        }
        Ok(valeur)
    }

    fn puiss(&mut self) -> Result<f64, ErreurEval> {
        let mut valeur = self.fonc()?;
        // NOTE: pliage à gauche, comme les autres étages : 2^3^2 == (2^3)^2.
        while let Some(Jeton::Operateur('^')) = self.courant() {
            self.avancer();
            valeur = valeur.powf(self.fonc()?);
        }
        Ok(valeur)
    }

    fn fonc(&mut self) -> Result<f64, ErreurEval> {
        if let Some(Jeton::Fonction(fonction)) = self.courant() {
            self.avancer();
            // récursion à droite : les fonctions s'empilent, cos(arctan(sin x))
            let argument = self.fonc()?;
            Ok(self.appliquer(fonction, argument))
        } else {
            self.atome()
        }
    }

    fn atome(&mut self) -> Result<f64, ErreurEval> {
        match self.courant() {
            Some(Jeton::Nombre(valeur)) => {
                self.avancer();
                Ok(valeur)
            }

            Some(Jeton::Variable(lettre)) => match self.variables.obtenir(lettre) {
                Some(valeur) => {
                    self.avancer();
                    Ok(valeur)
                }
                None => Err(ErreurEval::VariableIntrouvable(lettre)),
            },

            Some(Jeton::ParGauche) => {
                self.avancer();
                let valeur = self.addsub()?;
                match self.courant() {
                    Some(Jeton::ParDroite) => {
                        self.avancer();
                        Ok(valeur)
                    }
                    _ => Err(ErreurEval::JetonInattendu),
                }
            }

            _ => Err(ErreurEval::JetonInattendu),
        }
    }

    /// Applique une fonction unaire à la valeur de son argument.
    /// sin/cos/tan convertissent l'argument depuis le mode d'angle courant ;
    /// les arc* rendent toujours des radians, sans conversion du résultat.
    fn appliquer(&self, fonction: Fonction, x: f64) -> f64 {
        let mode = self.reglages.mode_angle;
        match fonction {
            Fonction::Sin => mode.en_radians(x).sin(),
            Fonction::Cos => mode.en_radians(x).cos(),
            Fonction::Tan => mode.en_radians(x).tan(),
            Fonction::ArcSin => x.asin(),
            Fonction::ArcCos => x.acos(),
            Fonction::ArcTan => x.atan(),
            Fonction::Log10 => x.log10(),
            Fonction::LogNaturel => x.ln(),
        }
    }
}
