use crate::pipeline::OperationKind;
use ahash::AHashMap;

/// The fixed script fragments emitted for one operation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    /// Function definition, emitted once per kind used (may include its own imports).
    pub definition: String,
    /// Statement that runs the operation and binds its result.
    pub invocation: String,
    /// Statement that prints the bound result.
    pub print: String,
}

impl ScriptTemplate {
    pub fn new(
        definition: impl Into<String>,
        invocation: impl Into<String>,
        print: impl Into<String>,
    ) -> Self {
        Self {
            definition: definition.into(),
            invocation: invocation.into(),
            print: print.into(),
        }
    }
}

/// Defines the built-in template table, its registration, and lookup by kind name.
macro_rules! define_script_templates {
    ( $( ($variant:ident, [ $( $line:expr ),* $(,)? ], $invocation:expr, $print:expr) ),* $(,)? ) => {
        /// The built-in template for a kind. The input kind has none.
        pub fn builtin_template(kind: OperationKind) -> Option<ScriptTemplate> {
            match kind {
                $(
                    OperationKind::$variant => Some(ScriptTemplate::new(
                        [ $( $line ),* ].join("\n"),
                        $invocation,
                        $print,
                    )),
                )*
                #[allow(unreachable_patterns)]
                _ => None,
            }
        }

        pub(super) fn register_default_templates(registry: &mut AHashMap<String, ScriptTemplate>) {
            $(
                if let Some(template) = builtin_template(OperationKind::$variant) {
                    registry.insert(OperationKind::$variant.as_str().to_string(), template);
                }
            )*
        }
    };
}

/// Looks up a built-in template by kind identifier.
pub(super) fn template_by_name(name: &str) -> Option<ScriptTemplate> {
    OperationKind::from_type_name(name).and_then(builtin_template)
}

define_script_templates! {
    (Tokenization, [
        "def tokenization(doc):",
        "    return [token.text for token in doc]",
    ], "tokens = tokenization(doc)", "print(\"Tokens:\", tokens)"),

    (PosTagging, [
        "def pos_tagging(doc):",
        "    return [(token.text, token.pos_) for token in doc]",
    ], "pos_tags = pos_tagging(doc)", "print(\"POS Tags:\", pos_tags)"),

    (NamedEntityRecognition, [
        "def named_entity_recognition(doc):",
        "    return [(ent.text, ent.label_) for ent in doc.ents]",
    ], "ner = named_entity_recognition(doc)", "print(\"NER:\", ner)"),

    (StopwordRemoval, [
        "def stopword_removal(doc):",
        "    return [token.text for token in doc if not token.is_stop]",
    ], "filtered_tokens = stopword_removal(doc)", "print(\"Filtered Tokens:\", filtered_tokens)"),

    (Lemmatization, [
        "def lemmatization(doc):",
        "    return [token.lemma_ for token in doc]",
    ], "lemmas = lemmatization(doc)", "print(\"Lemmas:\", lemmas)"),

    // Takes the raw string, not the parsed doc.
    (SentimentAnalysis, [
        "from textblob import TextBlob",
        "",
        "def sentiment_analysis(text):  # expects plain string",
        "    blob = TextBlob(text)",
        "    return blob.sentiment",
    ], "sentiment = sentiment_analysis(text)", "print(\"Sentiment:\", sentiment)"),

    (DependencyParsing, [
        "def dependency_parsing(doc):",
        "    return [(token.text, token.dep_, token.head.text) for token in doc]",
    ], "dependencies = dependency_parsing(doc)", "print(\"Dependencies:\", dependencies)"),

    (TextClassification, [
        "from textblob import TextBlob",
        "",
        "def text_classification(text):  # expects plain string",
        "    blob = TextBlob(text)",
        "    polarity = blob.sentiment.polarity",
        "    if polarity > 0.1:",
        "        return 'Positive'",
        "    elif polarity < -0.1:",
        "        return 'Negative'",
        "    else:",
        "        return 'Neutral'",
    ], "classification = text_classification(text)", "print(\"Classification:\", classification)"),

    (CoreferenceResolution, [
        "def coreference_resolution(doc):",
        "    return \"Coreference Resolution: Not implemented in spaCy by default\"",
    ], "coref_result = coreference_resolution(doc)", "print(\"Coreference Resolution:\", coref_result)"),

    (KeywordExtraction, [
        "def keyword_extraction(doc):",
        "    return list(set([token.lemma_ for token in doc if token.is_alpha and not token.is_stop]))",
    ], "keywords = keyword_extraction(doc)", "print(\"Keywords:\", keywords)"),

    (Stemming, [
        "from nltk.stem import PorterStemmer",
        "import nltk",
        "nltk.download('punkt')",
        "stemmer = PorterStemmer()",
        "",
        "def stemming(doc):",
        "    return [stemmer.stem(token.text) for token in doc]",
    ], "stems = stemming(doc)", "print(\"Stems:\", stems)"),

    (TextSummarization, [
        "from sumy.parsers.plaintext import PlaintextParser",
        "from sumy.nlp.tokenizers import Tokenizer",
        "from sumy.summarizers.lsa import LsaSummarizer",
        "",
        "def text_summarization(text):  # expects plain string",
        "    if len(text.split()) < 10:",
        "        return 'Text too short to summarize'",
        "    parser = PlaintextParser.from_string(text, Tokenizer('english'))",
        "    summarizer = LsaSummarizer()",
        "    summary = summarizer(parser.document, 2)",
        "    return ' '.join(str(sentence) for sentence in summary)",
    ], "summary = text_summarization(text)", "print(\"Summary:\", summary)"),
}
