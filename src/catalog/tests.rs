//! Integration tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{partition_authors, Catalog};
    use crate::io::paths::{CoverLocator, NoCovers};
    use crate::CatalogError;
    use pretty_assertions::assert_eq;

    const CATEGORIES: &str = "\
Nombre,Ficcion
Novela,true
Historia,false
Ciencia,false
";

    const BOOKS: &str = "\
Titulo,Autor,Calificacion,Categoria,Portada,Ancho,Alto
Viaje al centro de la Tierra,Julio Verne,4.1,Novela,verne1.jpg,200,300
Veinte mil leguas de viaje submarino,Julio Verne,4.3,Ciencia,verne2.jpg,200,300
Rayuela,Julio Cortázar,4.6,Novela,rayuela.jpg,200,300
Breve historia del tiempo,Stephen Hawking,4.5,Ciencia,hawking.jpg,180,260
Sapiens,Yuval Noah Harari,3.9,Historia,sapiens.jpg,180,260
";

    /// Pretends only the named covers exist
    struct Covers(&'static [&'static str]);

    impl CoverLocator for Covers {
        fn file_exists(&self, relative_name: &str) -> bool {
            self.0.iter().any(|name| *name == relative_name)
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_readers(CATEGORIES.as_bytes(), BOOKS.as_bytes(), &NoCovers).unwrap()
    }

    fn names<'a>(views: impl IntoIterator<Item = crate::catalog::CategoryView<'a>>) -> Vec<String> {
        views.into_iter().map(|v| v.name().to_string()).collect()
    }

    fn titles(books: &[&crate::catalog::Book]) -> Vec<String> {
        books.iter().map(|b| b.title().to_string()).collect()
    }

    fn assert_membership_consistent(catalog: &Catalog) {
        let per_category: usize = catalog.categories().map(|c| c.count()).sum();
        assert_eq!(catalog.book_count(), per_category);
        for book in catalog.books() {
            assert!(catalog.category_of(book).is_some());
        }
    }

    #[test]
    fn test_ingestion_keeps_membership_consistent() {
        let catalog = sample_catalog();
        assert_eq!(catalog.book_count(), 5);
        assert_eq!(catalog.category_count(), 3);
        assert_membership_consistent(&catalog);

        let novela = catalog.category_by_name("Novela").unwrap();
        assert_eq!(
            titles(&novela.books()),
            vec!["Viaje al centro de la Tierra", "Rayuela"]
        );
    }

    #[test]
    fn test_covers_attached_only_when_file_exists() {
        let covers = Covers(&["rayuela.jpg", "sapiens.jpg"]);
        let catalog =
            Catalog::from_readers(CATEGORIES.as_bytes(), BOOKS.as_bytes(), &covers).unwrap();

        assert_eq!(catalog.books_without_cover(), 3);
        let cover = catalog.find_book("Sapiens").unwrap().cover().unwrap();
        assert_eq!(cover.file, "sapiens.jpg");
        assert_eq!((cover.width, cover.height), (180, 260));
        assert!(catalog.find_book("Rayuela").unwrap().has_cover());
    }

    #[test]
    fn test_find_book_by_exact_title() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_book("Rayuela").unwrap().author(), "Julio Cortázar");
        assert!(catalog.find_book("rayuela").is_none());
    }

    #[test]
    fn test_book_summary_names_its_category() {
        let catalog = sample_catalog();
        let book = catalog.find_book("Breve historia del tiempo").unwrap();
        let summary = catalog.book_summary(book);

        assert_eq!(summary.title, "Breve historia del tiempo");
        assert_eq!(summary.author, "Stephen Hawking");
        assert_eq!(summary.category, "Ciencia");
        assert!(summary.cover.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["category"], "Ciencia");
        assert_eq!(json["rating"], 4.5);
    }

    #[test]
    fn test_author_search_is_case_insensitive_substring() {
        let catalog = sample_catalog();

        let hits = catalog.find_books_by_author("ulio v");
        assert_eq!(
            titles(&hits),
            vec![
                "Viaje al centro de la Tierra",
                "Veinte mil leguas de viaje submarino"
            ]
        );
        assert_eq!(catalog.find_books_by_author("JULIO").len(), 3);
        assert_eq!(catalog.find_books_by_author("").len(), 5);
    }

    #[test]
    fn test_author_search_follows_category_order() {
        let catalog = sample_catalog();
        // Novela comes before Ciencia in the registry
        let hits = catalog.find_books_by_author("julio");
        assert_eq!(
            titles(&hits),
            vec![
                "Viaje al centro de la Tierra",
                "Rayuela",
                "Veinte mil leguas de viaje submarino"
            ]
        );
    }

    #[test]
    fn test_categories_with_author_is_exact() {
        let catalog = sample_catalog();
        assert_eq!(
            names(catalog.categories_with_author("Julio Verne")),
            vec!["Novela", "Ciencia"]
        );
        assert!(catalog.categories_with_author("julio verne").is_empty());
        assert!(catalog.categories_with_author("Julio").is_empty());
    }

    #[test]
    fn test_books_in_category_signals_missing() {
        let catalog = sample_catalog();
        assert_eq!(catalog.books_in_category("Historia").unwrap().len(), 1);

        let err = catalog.books_in_category("Poesía").unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(ref name) if name == "Poesía"));
        // Plain lookups never grow the registry
        assert!(catalog.category_by_name("Poesía").is_none());
        assert_eq!(catalog.category_count(), 3);
    }

    #[test]
    fn test_average_rating() {
        assert!(Catalog::new().average_rating().is_nan());

        let single = Catalog::from_readers(
            "h\nNovela,true\n".as_bytes(),
            "h\nRayuela,Julio Cortázar,4.5,Novela,x,1,1\n".as_bytes(),
            &NoCovers,
        )
        .unwrap();
        assert_eq!(single.average_rating(), 4.5);

        let catalog = sample_catalog();
        let expected = (4.1 + 4.3 + 4.6 + 4.5 + 3.9) / 5.0;
        assert!((catalog.average_rating() - expected).abs() < 1e-12);
    }

    fn catalog_with_sizes(sizes: &[usize]) -> Catalog {
        let mut categories = String::from("nombre,ficcion\n");
        let mut books = String::from("header\n");
        for (c, size) in sizes.iter().enumerate() {
            categories.push_str(&format!("C{c},false\n"));
            for b in 0..*size {
                books.push_str(&format!("T{c}-{b},Autor {c},3.0,C{c},x,1,1\n"));
            }
        }
        Catalog::from_readers(categories.as_bytes(), books.as_bytes(), &NoCovers).unwrap()
    }

    #[test]
    fn test_most_books_prefers_first_on_tie() {
        let catalog = catalog_with_sizes(&[3, 5, 5, 1]);
        let best = catalog.category_with_most_books().unwrap();
        assert_eq!(best.name(), "C1");
        assert_eq!(best.count(), 5);

        assert!(Catalog::new().category_with_most_books().is_none());
    }

    #[test]
    fn test_most_books_with_only_empty_categories() {
        let catalog = catalog_with_sizes(&[0, 0]);
        assert_eq!(catalog.category_with_most_books().unwrap().name(), "C0");
    }

    #[test]
    fn test_best_average_ignores_empty_categories() {
        let categories = "h\nVacia,true\nBuena,false\nMejor,false\nTambien,false\n";
        let books = "h\n\
                     A,X,4.0,Buena,x,1,1\n\
                     B,Y,4.8,Mejor,x,1,1\n\
                     C,Z,4.8,Tambien,x,1,1\n";
        let catalog =
            Catalog::from_readers(categories.as_bytes(), books.as_bytes(), &NoCovers).unwrap();

        assert_eq!(catalog.category_with_best_average().unwrap().name(), "Mejor");
        assert!(catalog_with_sizes(&[0, 0])
            .category_with_best_average()
            .is_none());
    }

    #[test]
    fn test_best_average_skips_nan_categories() {
        // "NaN" parses as an f64 rating; it must not win or block the ranking
        let categories = "h\nRara,true\nBuena,false\n";
        let books = "h\n\
                     A,X,NaN,Rara,x,1,1\n\
                     B,Y,4.9,Buena,x,1,1\n";
        let catalog =
            Catalog::from_readers(categories.as_bytes(), books.as_bytes(), &NoCovers).unwrap();

        assert!(catalog.category_by_name("Rara").unwrap().average_rating().is_nan());
        assert_eq!(catalog.category_with_best_average().unwrap().name(), "Buena");

        let only_nan = Catalog::from_readers(
            "h\nRara,true\nVacia,false\n".as_bytes(),
            "h\nA,X,NaN,Rara,x,1,1\n".as_bytes(),
            &NoCovers,
        )
        .unwrap();
        assert!(only_nan.category_with_best_average().is_none());
    }

    #[test]
    fn test_author_in_multiple_categories() {
        assert!(sample_catalog().has_author_in_multiple_categories());

        let categories = "h\nNovela,true\nHistoria,false\n";
        let books = "h\n\
                     A,Julio Verne,4.0,Novela,x,1,1\n\
                     B,Julio Verne,4.0,Novela,x,1,1\n\
                     C,Mary Beard,4.0,Historia,x,1,1\n";
        let catalog =
            Catalog::from_readers(categories.as_bytes(), books.as_bytes(), &NoCovers).unwrap();
        assert!(!catalog.has_author_in_multiple_categories());
    }

    #[test]
    fn test_same_named_categories_do_not_count_as_distinct() {
        // Duplicate names in the categories file are kept, but books resolve to the first
        let categories = "h\nNovela,true\nNovela,false\n";
        let books = "h\nA,Julio Verne,4.0,Novela,x,1,1\nB,Julio Verne,4.0,Novela,x,1,1\n";
        let catalog =
            Catalog::from_readers(categories.as_bytes(), books.as_bytes(), &NoCovers).unwrap();

        assert_eq!(catalog.category_count(), 2);
        assert!(!catalog.has_author_in_multiple_categories());
    }

    #[test]
    fn test_unknown_category_creates_placeholder() {
        let books = format!(
            "{BOOKS}Odas elementales,Pablo Neruda,4.2,Poesía,x,1,1\n\
             Veinte poemas de amor,Pablo Neruda,4.4,Poesía,x,1,1\n\
             El aleph,Jorge Luis Borges,4.7,Cuento,x,1,1\n"
        );
        let catalog =
            Catalog::from_readers(CATEGORIES.as_bytes(), books.as_bytes(), &NoCovers).unwrap();

        assert_eq!(catalog.categories_on_file(), 3);
        assert_eq!(catalog.category_count(), 5);
        assert_membership_consistent(&catalog);

        let poesia = catalog.category_by_name("Poesía").unwrap();
        assert!(poesia.is_fiction());
        assert_eq!(poesia.count(), 2);

        let report = catalog.category_growth_report().unwrap();
        assert!(report.contains("Poesía: 2 books"), "{report}");
        assert!(report.contains("Cuento: 1 book"), "{report}");
        assert!(!report.contains("1 books"), "{report}");
    }

    #[test]
    fn test_no_growth_report_without_placeholders() {
        assert!(sample_catalog().category_growth_report().is_none());
    }

    #[test]
    fn test_rename_category() {
        let mut catalog = sample_catalog();
        catalog.rename_category("Ciencia", "Divulgación").unwrap();

        assert!(catalog.category_by_name("Ciencia").is_none());
        let renamed = catalog.category_by_name("Divulgación").unwrap();
        assert_eq!(renamed.count(), 2);

        // Books follow the category object, not its old name
        let book = catalog.find_book("Breve historia del tiempo").unwrap();
        assert_eq!(catalog.category_of(book).unwrap().name(), "Divulgación");
    }

    #[test]
    fn test_rename_errors() {
        let mut catalog = sample_catalog();

        assert!(matches!(
            catalog.rename_category("", "Nueva"),
            Err(CatalogError::EmptyInput)
        ));
        assert!(matches!(
            catalog.rename_category("Novela", ""),
            Err(CatalogError::EmptyInput)
        ));
        assert!(matches!(
            catalog.rename_category("Poesía", "Versos"),
            Err(CatalogError::CategoryNotFound(ref name)) if name == "Poesía"
        ));
        assert!(matches!(
            catalog.rename_category("Novela", "Historia"),
            Err(CatalogError::DuplicateCategory(ref name)) if name == "Historia"
        ));
        assert_eq!(
            names(catalog.categories()),
            vec!["Novela", "Historia", "Ciencia"]
        );
    }

    #[test]
    fn test_rename_to_same_name_is_duplicate() {
        let mut catalog = sample_catalog();
        assert!(matches!(
            catalog.rename_category("Novela", "Novela"),
            Err(CatalogError::DuplicateCategory(_))
        ));
        // Case differs, so this is a different name
        catalog.rename_category("Novela", "novela").unwrap();
    }

    #[test]
    fn test_partition_authors_is_pure() {
        let catalog = sample_catalog();
        let partition = partition_authors(&catalog, &["Julio Verne", "Isabel Allende", "Sapiens"]);

        assert_eq!(partition.found, vec!["Julio Verne"]);
        assert_eq!(partition.not_found, vec!["Isabel Allende", "Sapiens"]);
        assert!(!partition.is_complete());
        assert_eq!(catalog.book_count(), 5);
    }

    #[test]
    fn test_delete_rejection_pins_inverted_partition_naming() {
        let mut catalog = sample_catalog();
        let before: Vec<String> = catalog.books().map(|b| b.title().to_string()).collect();

        let err = catalog
            .delete_books_by_authors(&["Julio Verne", "Isabel Allende"])
            .unwrap_err();
        match err {
            CatalogError::SomeAuthorsNotFound { found, not_found } => {
                // Named inversion, pending clarification: the partition is pinned to
                // present authors under `found` and absent ones under `not_found`
                assert_eq!(
                    found,
                    vec!["Julio Verne"],
                    "inverted naming: present authors are reported as found"
                );
                assert_eq!(
                    not_found,
                    vec!["Isabel Allende"],
                    "inverted naming: absent authors are reported as not_found"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let after: Vec<String> = catalog.books().map(|b| b.title().to_string()).collect();
        assert_eq!(before, after);
        assert_membership_consistent(&catalog);
    }

    #[test]
    fn test_delete_removes_books_and_prunes_categories() {
        let mut catalog = sample_catalog();
        let report = catalog
            .delete_books_by_authors(&["Julio Verne", "Yuval Noah Harari"])
            .unwrap();

        assert_eq!(report.removed, 3);
        assert_eq!(report.authors, vec!["Julio Verne", "Yuval Noah Harari"]);
        assert_eq!(catalog.book_count(), 2);
        assert!(catalog.find_books_by_author("verne").is_empty());
        assert_eq!(catalog.category_by_name("Historia").unwrap().count(), 0);
        assert_eq!(catalog.category_by_name("Novela").unwrap().count(), 1);
        assert_membership_consistent(&catalog);
    }

    #[test]
    fn test_delete_with_no_authors_is_noop() {
        let mut catalog = sample_catalog();
        let report = catalog.delete_books_by_authors::<&str>(&[]).unwrap();
        assert_eq!(report.removed, 0);
        assert_eq!(catalog.book_count(), 5);
    }
}
