//! Records the resolver emits.
//!
//! A [`Problem`] pairs the comparison [`Stack`] that led to a conflict with
//! the [`Diff`] at its deepest layer and the [`ErrorType`] the classifier
//! picked for it. Everything here is plain data: renderers and fix writers
//! consume it after resolution has finished.

use std::fmt;
use std::sync::Arc;

use hound_ast::{FileId, NodeIndex, SyntaxKind};
use hound_types::TypeId;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// One side of one comparison layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    /// Source text of the node (or the property name for property layers).
    pub display_text: String,
    pub type_text: String,
    /// `name: type`, or just one of them when the other adds nothing.
    pub full_label: String,
    /// `file:line` of the node, empty for synthesized sides.
    pub link: String,
    pub type_id: Option<TypeId>,
}

impl NodeInfo {
    pub fn is_empty(&self) -> bool {
        self.display_text.is_empty() && self.type_text.is_empty()
    }
}

/// Stands in for a source that has no node of its own, e.g. the property
/// an assignment writes that the target type never declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub info: NodeInfo,
    /// Key on the target this placeholder is compared against.
    pub target_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayerSource {
    Node(NodeInfo),
    Placeholder(Placeholder),
}

impl LayerSource {
    pub fn info(&self) -> &NodeInfo {
        match self {
            LayerSource::Node(info) => info,
            LayerSource::Placeholder(placeholder) => &placeholder.info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonLayer {
    pub target: NodeInfo,
    pub source: LayerSource,
}

impl ComparisonLayer {
    pub fn new(target: NodeInfo, source: NodeInfo) -> Self {
        Self {
            target,
            source: LayerSource::Node(source),
        }
    }

    pub fn with_placeholder(target: NodeInfo, placeholder: Placeholder) -> Self {
        Self {
            target,
            source: LayerSource::Placeholder(placeholder),
        }
    }
}

struct StackNode {
    layer: ComparisonLayer,
    parent: Option<Arc<StackNode>>,
}

/// Outer-to-inner comparison layers.
///
/// Pushing returns a new stack that shares every earlier layer with the
/// one it was pushed onto, so sibling comparisons branch off a common
/// prefix without copying it. Published layers are never mutated.
#[derive(Clone, Default)]
pub struct Stack {
    head: Option<Arc<StackNode>>,
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layers(layers: impl IntoIterator<Item = ComparisonLayer>) -> Self {
        layers
            .into_iter()
            .fold(Stack::new(), |stack, layer| stack.push(layer))
    }

    #[must_use]
    pub fn push(&self, layer: ComparisonLayer) -> Stack {
        Stack {
            head: Some(Arc::new(StackNode {
                layer,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// The deepest layer.
    pub fn last(&self) -> Option<&ComparisonLayer> {
        self.head.as_deref().map(|node| &node.layer)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn layers(&self) -> Vec<&ComparisonLayer> {
        let mut out = Vec::with_capacity(self.len);
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            out.push(&node.layer);
            current = node.parent.as_deref();
        }
        out.reverse();
        out
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.layers()).finish()
    }
}

impl Serialize for Stack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for layer in self.layers() {
            seq.serialize_element(layer)?;
        }
        seq.end()
    }
}

/// Facts about one side of a [`TypeProblem`], captured when the problem is
/// built so classification needs no type database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFacts {
    pub is_array: bool,
    /// `never` or `never[]`.
    pub is_never: bool,
    pub is_simple: bool,
}

/// Two types that conflict as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProblem {
    pub source_info: NodeInfo,
    pub target_info: NodeInfo,
    pub source: TypeFacts,
    pub target: TypeFacts,
    /// Both sides belong to the same primitive family.
    pub like: bool,
}

/// Property sets seen when comparing in the source-to-target direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReversedShape {
    pub missing: Vec<String>,
    pub optional: Vec<String>,
    pub contextual: Vec<String>,
}

/// Two structured types whose properties disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProblem {
    pub target_info: NodeInfo,
    pub source_info: NodeInfo,
    /// Present on both sides with the same type.
    pub matched: Vec<String>,
    pub mismatch: Vec<String>,
    /// Mismatched, but declared with identical text (e.g. `string` against
    /// a string literal type); a cast usually fixes these.
    pub misslike: Vec<String>,
    /// Required by the target, absent from the source.
    pub missing: Vec<String>,
    /// Optional on the target, absent from the source.
    pub optional: Vec<String>,
    /// Nested shapes not compared because this level already failed.
    pub unchecked: Vec<String>,
    /// Shown only for orientation.
    pub contextual: Vec<String>,
    pub overlap: usize,
    pub total: usize,
    pub reversed: Option<ReversedShape>,
}

impl ShapeProblem {
    pub fn reversed_missing(&self) -> &[String] {
        self.reversed.as_ref().map_or(&[], |r| r.missing.as_slice())
    }

    /// `overlap / (total - optional)`, the better of the two directions.
    pub fn overlap_ratio(&self) -> f64 {
        let ratio = |optional: usize| {
            let denominator = self.total.saturating_sub(optional);
            if denominator == 0 {
                if self.overlap > 0 { 1.0 } else { 0.0 }
            } else {
                self.overlap as f64 / denominator as f64
            }
        };
        let forward = ratio(self.optional.len());
        match &self.reversed {
            Some(reversed) => forward.max(ratio(reversed.optional.len())),
            None => forward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "problems", rename_all = "camelCase")]
pub enum Diff {
    Type(TypeProblem),
    /// One or more candidate explanations, best first.
    Shapes(Vec<ShapeProblem>),
    /// Argument count mismatch; no types were compared.
    Arity,
}

/// Closed taxonomy of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorType {
    MustDeclare,
    ArrayToNonArray,
    NonArrayToArray,
    Misslike,
    Mismatch,
    SimpleToObject,
    ObjectToSimple,
    PropMismatch,
    TargetPropMissing,
    SourcePropMissing,
    BothMissing,
    Both,
    MissingIndex,
    TooManyArgs,
    TooFewArgs,
}

impl ErrorType {
    pub fn title(self) -> &'static str {
        match self {
            ErrorType::MustDeclare => "Source needs declaration",
            ErrorType::ArrayToNonArray => "Source is an array but should be simple",
            ErrorType::NonArrayToArray => "Source should be an array",
            ErrorType::Misslike => "Source needs a typecast",
            ErrorType::Mismatch => "The types are mismatched",
            ErrorType::SimpleToObject => "Source should be a function or object",
            ErrorType::ObjectToSimple => "Source is a function or object but should be simple",
            ErrorType::PropMismatch => "Source has mismatched properties",
            ErrorType::TargetPropMissing => "Source is missing properties",
            ErrorType::SourcePropMissing => "Source has too many properties",
            ErrorType::BothMissing => "Object has missing properties",
            ErrorType::Both => "Object has mismatched and missing properties",
            ErrorType::MissingIndex => "The map is missing an index property",
            ErrorType::TooManyArgs => "Too many calling arguments",
            ErrorType::TooFewArgs => "Too few calling arguments",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingPair {
    pub source: Option<NodeInfo>,
    pub target: Option<NodeInfo>,
    /// The parameter may be omitted.
    pub optional: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDetails {
    pub calling_pairs: Vec<CallingPair>,
    /// Position of the argument the checker flagged.
    pub error_index: Option<usize>,
    pub too_many_arguments: bool,
    pub too_few_arguments: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderTarget {
    pub key: String,
    pub type_id: TypeId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub code: u32,
    pub file: FileId,
    pub root: NodeIndex,
    pub root_kind: SyntaxKind,
    pub stack: Stack,
    pub diff: Diff,
    pub classification: ErrorType,
    pub call: Option<CallDetails>,
    pub placeholder_target: Option<PlaceholderTarget>,
    pub source_node: Option<NodeIndex>,
    pub target_node: Option<NodeIndex>,
    /// Declaration of the target, when it differs from the target node.
    pub target_declared: Option<NodeIndex>,
    /// Items or arguments after the failing one that were not compared.
    pub remaining: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnsupportedReason {
    /// The root is not a statement shape the resolver knows how to split.
    UnsupportedKind,
    /// Every comparison succeeded.
    NoConflictFound,
    /// The callee has no call signature.
    MissingSignature,
    /// The host has no type for a node the resolver needed.
    MissingType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unsupported {
    pub code: u32,
    pub file: FileId,
    pub node: NodeIndex,
    pub kind: SyntaxKind,
    pub reason: UnsupportedReason,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HoundReport {
    pub problems: Vec<Problem>,
    pub unsupported: Vec<Unsupported>,
}

impl HoundReport {
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty() && self.unsupported.is_empty()
    }
}
