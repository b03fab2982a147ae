//! Shared fixtures for catalog integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CATEGORIES_CSV: &str = "\
Nombre,Ficcion
Novela,true
Historia,false
Ciencia,false
";

pub const BOOKS_CSV: &str = "\
Titulo,Autor,Calificacion,Categoria,Portada,Ancho,Alto
Viaje al centro de la Tierra,Julio Verne,4.1,Novela,verne1.jpg,200,300
Veinte mil leguas de viaje submarino,Julio Verne,4.3,Ciencia,verne2.jpg,200,300
Rayuela,Julio Cortázar,4.6,Novela,rayuela.jpg,210,320
Breve historia del tiempo,Stephen Hawking,4.5,Ciencia,hawking.jpg,180,260
Sapiens,Yuval Noah Harari,3.9,Historia,sapiens.jpg,180,260
Odas elementales,Pablo Neruda,4.2,Poesía,neruda1.jpg,150,220
Veinte poemas de amor,Pablo Neruda,4.4,Poesía,neruda2.jpg,150,220
El aleph,Jorge Luis Borges,4.7,Cuento,aleph.jpg,150,220
";

/// A data directory with both CSV files and a few cover images
pub struct DataFixture {
    pub dir: TempDir,
}

impl DataFixture {
    pub fn new() -> Self {
        Self::with_contents(CATEGORIES_CSV, BOOKS_CSV, &["rayuela.jpg", "aleph.jpg"])
    }

    pub fn with_contents(categories: &str, books: &str, covers: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("categorias.csv"), categories).unwrap();
        fs::write(dir.path().join("libros.csv"), books).unwrap();
        for cover in covers {
            fs::write(dir.path().join(cover), b"\xFF\xD8\xFF").unwrap();
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn categories_csv(&self) -> PathBuf {
        self.path().join("categorias.csv")
    }

    pub fn books_csv(&self) -> PathBuf {
        self.path().join("libros.csv")
    }
}
