// src/cli.rs
//
// Interface en ligne de commande (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + commandes.rs + invite.rs)
// - Ré-exporter Session (pour main.rs: use crate::cli::Session;)
//
// La logique d'évaluation vit dans noyau/ ; ici il n'y a que la session,
// le dispatch des commandes et la boucle de l'invite.

pub mod commandes;
pub mod etat;
pub mod invite;

// Ré-export pratique : `use crate::cli::Session;`
pub use etat::Session;
