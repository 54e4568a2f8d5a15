//! Integration tests for full-issue analysis.

use gaceta::{
    analyze_pages, analyze_text, render, AnalyzeOptions, DocumentType, JsonFormat,
    UNKNOWN_INSTITUTION,
};

/// A small issue with masthead, letter-spaced TOC heading, one institution
/// section, a page break, and two acts in the body.
fn issue_text() -> &'static str {
    "Diario Oficial\n\
     Bogotá, D. C., jueves, 5 de enero de 2020\n\
     C o n t e n i d o\n\
     MINISTERIO DE HACIENDA Y CRÉDITO PÚBLICO\n\
     Decreto 123 de 2020, por el cual se liquida el presupuesto\n\
     2\n\
     DECRETO NÚMERO 123 DE 2020\n\
     Por la cual se ordena la liquidación del presu-\n\
     puesto general\n\
     (enero 5 de 2020)\n\
     RESOLUCIÓN NÚMERO 9 DE 2020\n\
     Por la cual se adoptan medidas transitorias"
}

#[test]
fn two_acts_are_segmented_and_attributed() {
    let analysis = analyze_text(issue_text());

    assert_eq!(analysis.document_count(), 2);
    assert_eq!(analysis.fecha_publicacion, "2020-01-05");

    let first = &analysis.documentos[0];
    assert_eq!(first.tipo_documento, DocumentType::Decreto);
    assert_eq!(first.numero, "123");
    assert_eq!(first.anio, "2020");
    assert_eq!(
        first.titulo,
        "DECRETO NÚMERO 123 DE 2020\n(enero 5 de 2020)"
    );
    assert_eq!(
        first.descripcion,
        "Por la cual se ordena la liquidación del presupuesto general"
    );
    assert_eq!(first.fecha_publicacion, "2020-01-05");
    assert_eq!(first.institucion, "Ministerio De Hacienda Y Crédito Público");

    let second = &analysis.documentos[1];
    assert_eq!(second.tipo_documento, DocumentType::Resolucion);
    assert_eq!(second.numero, "9");
    assert_eq!(second.titulo, "RESOLUCIÓN NÚMERO 9 DE 2020");
    assert_eq!(second.descripcion, "Por la cual se adoptan medidas transitorias");
}

#[test]
fn issue_without_toc_resolves_every_act_to_the_sentinel() {
    let analysis = analyze_text(
        "DECRETO NÚMERO 5 DE 2021\ncuerpo uno\nACUERDO NÚMERO 8 DE 2021\ncuerpo dos",
    );

    assert_eq!(analysis.document_count(), 2);
    for doc in &analysis.documentos {
        assert_eq!(doc.institucion, UNKNOWN_INSTITUTION);
    }
}

#[test]
fn issue_without_masthead_has_empty_publication_date() {
    let analysis = analyze_text("DECRETO NÚMERO 5 DE 2021\ncuerpo");
    assert_eq!(analysis.fecha_publicacion, "");
    assert_eq!(analysis.documentos[0].fecha_publicacion, "");
}

#[test]
fn issue_without_acts_yields_empty_list() {
    let analysis = analyze_text("Diario Oficial\nedición conmemorativa sin actos");
    assert!(analysis.is_empty());
}

#[test]
fn hyphen_break_across_pages_is_reassembled() {
    let pages = vec![
        "RESOLUCIÓN NÚMERO 44 DE 2022\nPor la cual se fija la remune-".to_string(),
        "ración de los servidores".to_string(),
    ];
    let analysis = analyze_pages(&pages, AnalyzeOptions::default());

    assert_eq!(analysis.document_count(), 1);
    assert_eq!(
        analysis.documentos[0].descripcion,
        "Por la cual se fija la remuneración de los servidores"
    );
}

#[test]
fn records_serialize_to_csv_and_json() {
    let analysis = analyze_text(issue_text());

    let csv = render::to_csv(&analysis.documentos).unwrap();
    assert!(csv.starts_with("tipo_documento,numero,anio,"));
    assert!(csv.contains("DECRETO,123,2020"));

    let json = render::to_json(&analysis.documentos, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"tipo_documento\":\"RESOLUCIÓN\""));
    assert!(json.contains("\"institucion\":\"Ministerio De Hacienda Y Crédito Público\""));
}

#[test]
fn unaccented_boundaries_and_ligatures_are_tolerated() {
    let analysis = analyze_text(
        "RESOLUCION NUMERO 77 DE 2023\nPor la cual se modi\u{FB01}ca el reglamento",
    );

    assert_eq!(analysis.document_count(), 1);
    assert_eq!(analysis.documentos[0].tipo_documento, DocumentType::Resolucion);
    assert_eq!(analysis.documentos[0].numero, "77");
    assert_eq!(
        analysis.documentos[0].descripcion,
        "Por la cual se modifica el reglamento"
    );
}
