use std::fmt;

/// The fixed set of operation kinds a pipeline node can have.
///
/// Nodes store their kind as the raw identifier string (see [`Node::kind`](super::Node)),
/// so graphs with unrecognised kinds still load. This enum is the typed view over the
/// identifiers the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    TextInput,
    NamedEntityRecognition,
    SentimentAnalysis,
    TextSummarization,
    Tokenization,
    Stemming,
    Lemmatization,
    PosTagging,
    StopwordRemoval,
    DependencyParsing,
    TextClassification,
    CoreferenceResolution,
    KeywordExtraction,
}

/// Identifier of the distinguished input kind.
pub const INPUT_KIND: &str = "textInput";

impl OperationKind {
    /// Every kind, input first, then the operations in palette order.
    pub const ALL: [OperationKind; 13] = [
        OperationKind::TextInput,
        OperationKind::NamedEntityRecognition,
        OperationKind::SentimentAnalysis,
        OperationKind::TextSummarization,
        OperationKind::Tokenization,
        OperationKind::Stemming,
        OperationKind::Lemmatization,
        OperationKind::PosTagging,
        OperationKind::StopwordRemoval,
        OperationKind::DependencyParsing,
        OperationKind::TextClassification,
        OperationKind::CoreferenceResolution,
        OperationKind::KeywordExtraction,
    ];

    /// The camelCase identifier used in the graph JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::TextInput => INPUT_KIND,
            OperationKind::NamedEntityRecognition => "namedEntityRecognition",
            OperationKind::SentimentAnalysis => "sentimentAnalysis",
            OperationKind::TextSummarization => "textSummarization",
            OperationKind::Tokenization => "tokenization",
            OperationKind::Stemming => "stemming",
            OperationKind::Lemmatization => "lemmatization",
            OperationKind::PosTagging => "posTagging",
            OperationKind::StopwordRemoval => "stopwordRemoval",
            OperationKind::DependencyParsing => "dependencyParsing",
            OperationKind::TextClassification => "textClassification",
            OperationKind::CoreferenceResolution => "coreferenceResolution",
            OperationKind::KeywordExtraction => "keywordExtraction",
        }
    }

    /// Human-readable name, as shown in the task palette.
    pub fn display_name(self) -> &'static str {
        match self {
            OperationKind::TextInput => "Text Input",
            OperationKind::NamedEntityRecognition => "Named Entity Recognition",
            OperationKind::SentimentAnalysis => "Sentiment Analysis",
            OperationKind::TextSummarization => "Text Summarization",
            OperationKind::Tokenization => "Tokenization",
            OperationKind::Stemming => "Stemming",
            OperationKind::Lemmatization => "Lemmatization",
            OperationKind::PosTagging => "POS Tagging",
            OperationKind::StopwordRemoval => "Stopword Removal",
            OperationKind::DependencyParsing => "Dependency Parsing",
            OperationKind::TextClassification => "Text Classification",
            OperationKind::CoreferenceResolution => "Coreference Resolution",
            OperationKind::KeywordExtraction => "Keyword Extraction",
        }
    }

    /// Looks up a kind by its identifier. Returns `None` for unknown identifiers.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn is_input(self) -> bool {
        self == OperationKind::TextInput
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
