/// Walkthrough of the docdex API:
/// - configure stop words
/// - index a small collection
/// - run union and intersection queries
/// - inspect index statistics
use docdex::{Config, DocId, Document, SearchEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let documents = vec![
        Document::new(1u64, "This is the first document. It contains some text."),
        Document::new(2u64, "The second document is longer. It also contains some text."),
        Document::new(
            3u64,
            "This is the third document. It is different from the first two.",
        ),
    ];

    let config = Config::with_stop_words(["is", "the", "it", "and", "some"]);
    let engine = SearchEngine::from_documents(documents, config)?;

    println!(
        "Indexed {} documents, {} distinct terms\n",
        engine.doc_count(),
        engine.term_count()
    );

    for query in ["document contains text", "first", "missing words"] {
        println!("any of {:?}  -> [{}]", query, format_ids(engine.search(query)));
    }
    println!(
        "all of {:?}  -> [{}]",
        "document contains text",
        format_ids(engine.search_all("document contains text"))
    );

    if let Some(list) = engine.search_term("text") {
        println!(
            "\nTerm 'text' appears in {} documents, {} occurrences total",
            list.doc_freq(),
            list.total_freq()
        );
    }

    println!(
        "\nIndex stats:\n{}",
        serde_json::to_string_pretty(&engine.stats())?
    );

    Ok(())
}

fn format_ids(ids: impl IntoIterator<Item = DocId>) -> String {
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
