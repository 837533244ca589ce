//! Library tool catalog
//!
//! Names, descriptions and parameter schemas of every tool the server
//! exposes, in the order they are advertised.

use sefaria_domain::tool::entities::{ParamType, ToolDefinition, ToolParameter};

pub const GET_TEXT: &str = "get_text";
pub const GET_ENGLISH_TRANSLATIONS: &str = "get_english_translations";
pub const GET_SITUATIONAL_INFO: &str = "get_situational_info";
pub const GET_LINKS: &str = "get_links";
pub const SEARCH_TEXTS: &str = "search_texts";
pub const SEARCH_IN_BOOK: &str = "search_in_book";
pub const SEARCH_DICTIONARIES: &str = "search_dictionaries";
pub const GET_NAME: &str = "get_name";
pub const GET_SHAPE: &str = "get_shape";
pub const GET_SEARCH_PATH_FILTER: &str = "get_search_path_filter";
pub const GET_TOPICS: &str = "get_topics";
pub const GET_MANUSCRIPTS: &str = "get_manuscripts";
pub const GET_INDEX: &str = "get_index";

/// Default number of search results
pub const DEFAULT_SEARCH_SIZE: i64 = 10;

const REFERENCE_DESCRIPTION: &str = "Text reference (e.g. 'Genesis 1:1' or 'שולחן ערוך אורח חיים סימן א'). \
     Use get_name to validate complex references.";

fn reference_param() -> ToolParameter {
    ToolParameter::new("reference", REFERENCE_DESCRIPTION, true)
}

fn query_param(description: &str) -> ToolParameter {
    ToolParameter::new("query", description, true)
}

fn size_param() -> ToolParameter {
    ToolParameter::new(
        "size",
        format!("Number of results to return (default: {})", DEFAULT_SEARCH_SIZE),
        false,
    )
    .with_type(ParamType::Integer)
    .with_default(DEFAULT_SEARCH_SIZE)
}

pub fn get_text() -> ToolDefinition {
    ToolDefinition::new(
        GET_TEXT,
        "Retrieves text content from a specific reference in the Jewish library (returns JSON)",
    )
    .with_parameter(reference_param())
    .with_parameter(
        ToolParameter::new(
            "version_language",
            "Language version: 'source' (original), 'english', 'both', or omit for all versions",
            false,
        )
        .with_allowed_values(["source", "english", "both"]),
    )
}

pub fn get_english_translations() -> ToolDefinition {
    ToolDefinition::new(
        GET_ENGLISH_TRANSLATIONS,
        "Retrieves all English translations for a given textual reference (returns JSON)",
    )
    .with_parameter(reference_param())
}

pub fn get_situational_info() -> ToolDefinition {
    ToolDefinition::new(
        GET_SITUATIONAL_INFO,
        "Provides current Jewish calendar information (Hebrew date, Parshat Hashavua, Daf Yomi) - no parameters needed",
    )
}

pub fn get_links() -> ToolDefinition {
    ToolDefinition::new(
        GET_LINKS,
        "Finds connections (commentaries, sources, parallels) linked to a specific text reference (returns JSON)",
    )
    .with_parameter(reference_param())
    .with_parameter(
        ToolParameter::new(
            "with_text",
            "Include text content: '0' (exclude, default) or '1' (include). Use get_text for individual texts.",
            false,
        )
        .with_allowed_values(["0", "1"])
        .with_default("0"),
    )
}

pub fn search_texts() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_TEXTS,
        "Searches the entire Jewish text library with optional filters (returns JSON array of results)",
    )
    .with_parameter(query_param("Search term(s) to find in texts"))
    .with_parameter(
        ToolParameter::new(
            "filters",
            "Category filters: a single string or an array of strings (e.g. ['Tanakh', 'Talmud/Bavli']). \
             Common categories: Tanakh, Mishnah, Talmud, Midrash, Halakhah, Kabbalah, Liturgy, \
             Jewish Thought, Talmud/Bavli. Use get_shape to discover categories.",
            false,
        )
        .with_type(ParamType::StringOrArray),
    )
    .with_parameter(size_param())
}

pub fn search_in_book() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_IN_BOOK,
        "Searches within a single book, resolved by name (returns JSON array of results)",
    )
    .with_parameter(query_param("Search term(s) to find in the book"))
    .with_parameter(ToolParameter::new(
        "book_name",
        "Name of the book to search in (e.g. 'Genesis', 'Berakhot')",
        true,
    ))
    .with_parameter(size_param())
}

pub fn search_dictionaries() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_DICTIONARIES,
        "Searches specifically in Jewish dictionaries (Jastrow, BDB, Klein) - returns structured entries",
    )
    .with_parameter(query_param("Term to search in dictionary entries"))
}

pub fn get_name() -> ToolDefinition {
    ToolDefinition::new(
        GET_NAME,
        "Validates and autocompletes text names, references, topics - use to find exact references (returns JSON)",
    )
    .with_parameter(ToolParameter::new(
        "name",
        "Partial or complete text name or reference to validate",
        true,
    ))
    .with_parameter(
        ToolParameter::new("limit", "Max number of suggestions to return (0 = no limit)", false)
            .with_type(ParamType::Integer),
    )
    .with_parameter(
        ToolParameter::new("type_filter", "Filter by entity type", false).with_allowed_values([
            "ref",
            "Collection",
            "Topic",
            "TocCategory",
            "Term",
            "User",
        ]),
    )
}

pub fn get_shape() -> ToolDefinition {
    ToolDefinition::new(
        GET_SHAPE,
        "Retrieves structure of texts or lists contents of categories (returns hierarchical JSON)",
    )
    .with_parameter(ToolParameter::new(
        "name",
        "Text name (e.g. 'Genesis') or category (e.g. 'Tanakh', 'Talmud'). Categories include: \
         Tanakh, Mishnah, Talmud, Midrash, Halakhah, Kabbalah, Liturgy, Jewish Thought, etc.",
        true,
    ))
}

pub fn get_search_path_filter() -> ToolDefinition {
    ToolDefinition::new(
        GET_SEARCH_PATH_FILTER,
        "Resolves a book name to the category path used as a search filter (returns plain text)",
    )
    .with_parameter(ToolParameter::new(
        "book_name",
        "Name of the book (e.g. 'Genesis')",
        true,
    ))
}

pub fn get_topics() -> ToolDefinition {
    ToolDefinition::new(
        GET_TOPICS,
        "Retrieves a topic with its description, optionally with linked topics and source references (returns JSON)",
    )
    .with_parameter(ToolParameter::new(
        "topic_slug",
        "Topic identifier (e.g. 'moses', 'shabbat')",
        true,
    ))
    .with_parameter(
        ToolParameter::new("with_links", "Include linked topics", false)
            .with_type(ParamType::Boolean)
            .with_default(false),
    )
    .with_parameter(
        ToolParameter::new("with_refs", "Include source references", false)
            .with_type(ParamType::Boolean)
            .with_default(false),
    )
}

pub fn get_manuscripts() -> ToolDefinition {
    ToolDefinition::new(
        GET_MANUSCRIPTS,
        "Retrieves manuscript images and metadata for a text reference (returns JSON)",
    )
    .with_parameter(reference_param())
}

pub fn get_index() -> ToolDefinition {
    ToolDefinition::new(
        GET_INDEX,
        "Retrieves the bibliographic index record of a text: authors, composition date, structure (returns JSON)",
    )
    .with_parameter(ToolParameter::new(
        "title",
        "Exact title of the text (e.g. 'Genesis', 'Mishneh Torah, Repentance')",
        true,
    ))
}
