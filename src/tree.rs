//! The addressable error tree.
//!
//! This module provides [`ErrorTree`], which records validation failures at
//! the [`Path`] where they happened. Nodes live in an arena owned by the
//! tree and are addressed by [`NodeId`]; parents own their children through
//! the child maps and children point back at their parent by id.
//!
//! Reads go through [`ErrorNode`] and never create nodes. Writes go through
//! [`ErrorNodeMut`], which creates every missing node (and child map) along
//! the way. Nothing is allocated for a location until the first write
//! reaches it, so a tree for a large structure with few failures stays small.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::prelude::*;

use crate::error::ValidateError;
use crate::path::{ComponentVisitor, Path, PathSegment};

/// An error value as stored in the tree.
pub type SharedError = Arc<dyn ValidateError>;

/// Identifies a node within one [`ErrorTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    // The key under which the parent holds this node. None for the root.
    segment: Option<PathSegment>,
    named: Option<IndexMap<String, NodeId>>,
    indexed: Option<BTreeMap<usize, NodeId>>,
    // A node with errors is not expected to have children, but nothing
    // prevents it.
    errors: Option<Vec<SharedError>>,
}

impl Node {
    fn new(parent: Option<NodeId>, segment: Option<PathSegment>) -> Self {
        Self {
            parent,
            segment,
            named: None,
            indexed: None,
            errors: None,
        }
    }
}

/// A tree of validation failures keyed by [`Path`].
///
/// # Example
///
/// ```rust
/// use validates::{ErrorTree, Path};
/// use validates::error::SimpleError;
///
/// let mut tree = ErrorTree::new();
/// let name = Path::root().down_field("user").down_field("name");
///
/// tree.add_at(&name, SimpleError::new("should be present"));
///
/// assert!(tree.has_errors());
/// assert!(tree.has_error_at(&name));
/// assert!(!tree.has_error_at(&Path::root().down_field("user")));
/// assert!(tree.is_error_at(&name, &SimpleError::new("should be present")));
/// ```
#[derive(Debug, Clone)]
pub struct ErrorTree {
    nodes: Vec<Node>,
}

impl ErrorTree {
    /// Creates a tree holding only an empty root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, None)],
        }
    }

    /// Returns a read-only handle to the root.
    pub fn root(&self) -> ErrorNode<'_> {
        ErrorNode {
            tree: self,
            id: ROOT,
        }
    }

    /// Returns a writing handle to the root.
    pub fn root_mut(&mut self) -> ErrorNodeMut<'_> {
        ErrorNodeMut {
            tree: self,
            id: ROOT,
        }
    }

    /// Returns a read-only handle to the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<ErrorNode<'_>> {
        (id.0 < self.nodes.len()).then_some(ErrorNode { tree: self, id })
    }

    /// Returns a writing handle to the node with the given id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<ErrorNodeMut<'_>> {
        (id.0 < self.nodes.len()).then_some(ErrorNodeMut { tree: self, id })
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if any node holds an error.
    pub fn has_errors(&self) -> bool {
        self.root().has_errors()
    }

    /// Returns the number of errors held by all nodes.
    pub fn error_count(&self) -> usize {
        self.root().error_count()
    }

    /// See [`ErrorNode::has_error_at`].
    pub fn has_error_at(&self, path: &Path) -> bool {
        self.root().has_error_at(path)
    }

    /// See [`ErrorNode::is_error_at`].
    pub fn is_error_at(&self, path: &Path, candidate: &dyn ValidateError) -> bool {
        self.root().is_error_at(path, candidate)
    }

    /// See [`ErrorNode::errors_at`].
    pub fn errors_at(&self, path: &Path) -> &[SharedError] {
        self.root().errors_at(path)
    }

    /// Adds `error` at `path`, creating the nodes along the way.
    pub fn add_at<E: ValidateError>(&mut self, path: &Path, error: E) {
        self.root_mut().descend(path).add(error);
    }

    /// Returns true if both trees hold the same errors at the same paths.
    /// See [`ErrorNode::is_equal`].
    pub fn is_equal(&self, other: &ErrorTree) -> bool {
        self.root().is_equal(&other.root())
    }

    /// Returns every error with the path of the node holding it.
    ///
    /// See [`ErrorNode::entries`] for the order and for names that render
    /// ambiguously.
    pub fn entries(&self) -> Vec<(Path, &SharedError)> {
        self.root().entries()
    }

    /// Appends every error of `other` at the same path in this tree.
    pub fn merge(&mut self, other: &ErrorTree) {
        self.merge_node(ROOT, other.root());
    }

    /// Renders the tree as a JSON object mapping each path holding errors to
    /// the list of its rendered messages.
    ///
    /// Nodes whose paths render alike share one key, so errors written under
    /// a field named `a/b` are listed together with those under `a` then `b`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validates::{ErrorTree, Path};
    /// use validates::error::SimpleError;
    /// use serde_json::json;
    ///
    /// let mut tree = ErrorTree::new();
    /// tree.add_at(&Path::parse("/tags[0]").unwrap(), SimpleError::new("should not be empty"));
    ///
    /// assert_eq!(tree.to_json(), json!({"/tags[0]": ["should not be empty"]}));
    /// ```
    pub fn to_json(&self) -> Value {
        let mut report = Map::new();
        for (path, error) in self.entries() {
            let messages = report
                .entry(path.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(messages) = messages {
                messages.push(Value::String(error.to_string()));
            }
        }
        Value::Object(report)
    }

    fn merge_node(&mut self, target: NodeId, source: ErrorNode<'_>) {
        for error in source.errors() {
            self.push_error(target, Arc::clone(error));
        }
        for (name, child) in source.fields() {
            let next = self.down_field(target, name);
            self.merge_node(next, child);
        }
        for (index, child) in source.indices() {
            let next = self.down_index(target, index);
            self.merge_node(next, child);
        }
    }

    fn down_field(&mut self, id: NodeId, name: &str) -> NodeId {
        let existing = self.nodes[id.0]
            .named
            .as_ref()
            .and_then(|children| children.get(name))
            .copied();
        if let Some(child) = existing {
            return child;
        }
        let child = self.alloc(id, PathSegment::Field(name.to_string()));
        self.nodes[id.0]
            .named
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), child);
        child
    }

    fn down_index(&mut self, id: NodeId, index: usize) -> NodeId {
        let existing = self.nodes[id.0]
            .indexed
            .as_ref()
            .and_then(|children| children.get(&index))
            .copied();
        if let Some(child) = existing {
            return child;
        }
        let child = self.alloc(id, PathSegment::Index(index));
        self.nodes[id.0]
            .indexed
            .get_or_insert_with(BTreeMap::new)
            .insert(index, child);
        child
    }

    fn alloc(&mut self, parent: NodeId, segment: PathSegment) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(parent), Some(segment)));
        id
    }

    fn push_error(&mut self, id: NodeId, error: SharedError) {
        self.nodes[id.0]
            .errors
            .get_or_insert_with(Vec::new)
            .push(error);
    }
}

impl Default for ErrorTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ErrorTree {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Semigroup for ErrorTree {
    fn combine(mut self, other: Self) -> Self {
        self.merge(&other);
        self
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries();
        writeln!(f, "Validation failed with {} error(s):", entries.len())?;
        for (i, (path, error)) in entries.iter().enumerate() {
            writeln!(f, "  {}. {}: {}", i + 1, path, error)?;
        }
        Ok(())
    }
}

// Error values are Send + Sync, so a whole tree can move to another thread.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorTree>();
    assert_sync::<ErrorTree>();
};

/// A read-only handle to one node of an [`ErrorTree`].
#[derive(Clone, Copy)]
pub struct ErrorNode<'a> {
    tree: &'a ErrorTree,
    id: NodeId,
}

impl<'a> ErrorNode<'a> {
    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the parent, or this node if it is the root.
    pub fn up(&self) -> ErrorNode<'a> {
        match self.data().parent {
            Some(parent) => self.at(parent),
            None => *self,
        }
    }

    /// Returns true if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    /// Returns the child for field `name`, if it was ever written.
    pub fn field(&self, name: &str) -> Option<ErrorNode<'a>> {
        self.data()
            .named
            .as_ref()
            .and_then(|children| children.get(name))
            .map(|id| self.at(*id))
    }

    /// Returns the child for array element `index`, if it was ever written.
    pub fn index(&self, index: usize) -> Option<ErrorNode<'a>> {
        self.data()
            .indexed
            .as_ref()
            .and_then(|children| children.get(&index))
            .map(|id| self.at(*id))
    }

    /// Returns the named children in the order they were first written.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, ErrorNode<'a>)> + 'a {
        let tree = self.tree;
        tree.nodes[self.id.0]
            .named
            .iter()
            .flatten()
            .map(move |(name, id)| (name.as_str(), ErrorNode { tree, id: *id }))
    }

    /// Returns the indexed children in ascending index order.
    pub fn indices(&self) -> impl Iterator<Item = (usize, ErrorNode<'a>)> + 'a {
        let tree = self.tree;
        tree.nodes[self.id.0]
            .indexed
            .iter()
            .flatten()
            .map(move |(index, id)| (*index, ErrorNode { tree, id: *id }))
    }

    /// Returns the errors held by this node only; children are not included.
    pub fn errors(&self) -> &'a [SharedError] {
        self.data().errors.as_deref().unwrap_or(&[])
    }

    /// Returns true if this node or any descendant holds an error.
    ///
    /// This walks the subtree on every call.
    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
            || self.fields().any(|(_, child)| child.has_errors())
            || self.indices().any(|(_, child)| child.has_errors())
    }

    /// Returns the number of errors held by this node and its descendants.
    pub fn error_count(&self) -> usize {
        self.errors().len()
            + self
                .fields()
                .map(|(_, child)| child.error_count())
                .sum::<usize>()
            + self
                .indices()
                .map(|(_, child)| child.error_count())
                .sum::<usize>()
    }

    /// Follows `path` from this node without creating anything.
    ///
    /// Returns `None` as soon as a component has no matching child.
    pub fn resolve(&self, path: &Path) -> Option<ErrorNode<'a>> {
        let mut resolver = Resolve {
            tree: self.tree,
            current: self.id,
        };
        path.visit(&mut resolver).then(|| self.at(resolver.current))
    }

    /// Returns true if the node at `path` holds at least one error of its own.
    ///
    /// A path that was never written is not an error; it simply has no
    /// errors. Errors on children of the resolved node are not considered.
    pub fn has_error_at(&self, path: &Path) -> bool {
        !self.errors_at(path).is_empty()
    }

    /// Returns true if the node at `path` holds an error equal to `candidate`.
    pub fn is_error_at(&self, path: &Path, candidate: &dyn ValidateError) -> bool {
        self.errors_at(path)
            .iter()
            .any(|error| error.is_equal(candidate))
    }

    /// Returns the errors of the node at `path`, or an empty slice if the
    /// path was never written.
    pub fn errors_at(&self, path: &Path) -> &'a [SharedError] {
        match self.resolve(path) {
            Some(node) => node.errors(),
            None => &[],
        }
    }

    /// Returns the absolute path of this node.
    pub fn path(&self) -> Path {
        let mut segments = Vec::new();
        let mut current = *self;
        while let Some(segment) = &current.data().segment {
            segments.push(segment.clone());
            current = current.up();
        }
        segments.reverse();
        Path::from_segments(true, segments)
    }

    /// Returns every error of this subtree with the path of the node holding it.
    ///
    /// Order is depth first: a node's own errors, then its named children in
    /// insertion order, then its indexed children in ascending order.
    ///
    /// Write navigation does not check field names, so a child named `a/b`
    /// renders the same path as child `b` of child `a`. Both entries are
    /// reported with that path, but resolving the path finds only the latter.
    pub fn entries(&self) -> Vec<(Path, &'a SharedError)> {
        let mut out = Vec::new();
        self.collect_entries(self.path(), &mut out);
        out
    }

    /// Returns true if both subtrees hold the same errors at the same places.
    ///
    /// Local errors are compared as multisets: every error here must be
    /// matched by a distinct equal error there, so `[X, X, Y]` is not equal to
    /// `[X, Y, Y]`. Child maps must be present on both sides or on neither,
    /// hold the same keys, and hold equal children under each key.
    pub fn is_equal(&self, other: &ErrorNode<'_>) -> bool {
        let (ours, theirs) = (self.data(), other.data());

        if !errors_match(self.errors(), other.errors()) {
            return false;
        }

        match (&ours.indexed, &theirs.indexed) {
            (None, None) => {}
            (Some(our_children), Some(their_children)) => {
                if our_children.len() != their_children.len() {
                    return false;
                }
                for (index, child) in our_children {
                    match their_children.get(index) {
                        Some(their_child) if self.at(*child).is_equal(&other.at(*their_child)) => {}
                        _ => return false,
                    }
                }
            }
            _ => return false,
        }

        match (&ours.named, &theirs.named) {
            (None, None) => {}
            (Some(our_children), Some(their_children)) => {
                if our_children.len() != their_children.len() {
                    return false;
                }
                for (name, child) in our_children {
                    match their_children.get(name) {
                        Some(their_child) if self.at(*child).is_equal(&other.at(*their_child)) => {}
                        _ => return false,
                    }
                }
            }
            _ => return false,
        }

        true
    }

    fn collect_entries(&self, path: Path, out: &mut Vec<(Path, &'a SharedError)>) {
        for error in self.errors() {
            out.push((path.clone(), error));
        }
        for (name, child) in self.fields() {
            let child_path = path.push(PathSegment::Field(name.to_string()));
            child.collect_entries(child_path, out);
        }
        for (index, child) in self.indices() {
            child.collect_entries(path.down_index(index), out);
        }
    }

    fn data(&self) -> &'a Node {
        &self.tree.nodes[self.id.0]
    }

    fn at(&self, id: NodeId) -> ErrorNode<'a> {
        ErrorNode {
            tree: self.tree,
            id,
        }
    }
}

impl fmt::Debug for ErrorNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorNode")
            .field("path", &self.path())
            .field("errors", &self.errors())
            .finish()
    }
}

/// A writing handle to one node of an [`ErrorTree`].
///
/// Navigation consumes the handle and returns one for the target node,
/// creating it (and the child map holding it) on first use.
///
/// # Example
///
/// ```rust
/// use validates::{ErrorTree, Path};
/// use validates::error::SimpleError;
///
/// let mut tree = ErrorTree::new();
/// tree.root_mut()
///     .down_field("tags")
///     .down_index(0)
///     .add(SimpleError::new("should not be empty"));
///
/// assert!(tree.has_error_at(&Path::parse("/tags[0]").unwrap()));
/// ```
pub struct ErrorNodeMut<'a> {
    tree: &'a mut ErrorTree,
    id: NodeId,
}

impl<'a> ErrorNodeMut<'a> {
    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Moves to the parent, or stays put at the root.
    pub fn up(self) -> Self {
        let parent = self.tree.nodes[self.id.0].parent;
        ErrorNodeMut {
            id: parent.unwrap_or(self.id),
            tree: self.tree,
        }
    }

    /// Returns true if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.tree.nodes[self.id.0].parent.is_none()
    }

    /// Moves to the child for field `name`, creating it if needed.
    ///
    /// Any name is accepted. Names containing `/`, `[` or `]` are stored as
    /// given but cannot be reached through a parsed [`Path`].
    pub fn down_field(self, name: &str) -> Self {
        let ErrorNodeMut { tree, id } = self;
        let child = tree.down_field(id, name);
        ErrorNodeMut { tree, id: child }
    }

    /// Moves to the child for array element `index`, creating it if needed.
    pub fn down_index(self, index: usize) -> Self {
        let ErrorNodeMut { tree, id } = self;
        let child = tree.down_index(id, index);
        ErrorNodeMut { tree, id: child }
    }

    /// Follows `path` from this node, creating every missing node.
    pub fn descend(self, path: &Path) -> Self {
        let ErrorNodeMut { tree, id } = self;
        let mut descend = Descend { tree, current: id };
        path.visit(&mut descend);
        let Descend { tree, current } = descend;
        ErrorNodeMut { tree, id: current }
    }

    /// Appends an error to this node.
    pub fn add<E: ValidateError>(&mut self, error: E) {
        self.add_shared(Arc::new(error));
    }

    /// Appends an already shared error to this node.
    pub fn add_shared(&mut self, error: SharedError) {
        self.tree.push_error(self.id, error);
    }

    /// Returns a read-only view of this node.
    pub fn as_node(&self) -> ErrorNode<'_> {
        ErrorNode {
            tree: &*self.tree,
            id: self.id,
        }
    }
}

struct Resolve<'a> {
    tree: &'a ErrorTree,
    current: NodeId,
}

impl ComponentVisitor for Resolve<'_> {
    fn visit_field(&mut self, name: &str) -> bool {
        let child = self.tree.nodes[self.current.0]
            .named
            .as_ref()
            .and_then(|children| children.get(name));
        match child {
            Some(child) => {
                self.current = *child;
                true
            }
            None => false,
        }
    }

    fn visit_index(&mut self, index: usize) -> bool {
        let child = self.tree.nodes[self.current.0]
            .indexed
            .as_ref()
            .and_then(|children| children.get(&index));
        match child {
            Some(child) => {
                self.current = *child;
                true
            }
            None => false,
        }
    }
}

struct Descend<'a> {
    tree: &'a mut ErrorTree,
    current: NodeId,
}

impl ComponentVisitor for Descend<'_> {
    fn visit_field(&mut self, name: &str) -> bool {
        self.current = self.tree.down_field(self.current, name);
        true
    }

    fn visit_index(&mut self, index: usize) -> bool {
        self.current = self.tree.down_index(self.current, index);
        true
    }
}

fn errors_match(ours: &[SharedError], theirs: &[SharedError]) -> bool {
    if ours.len() != theirs.len() {
        return false;
    }
    let mut unmatched: Vec<&dyn ValidateError> = theirs.iter().map(|error| &**error).collect();
    for error in ours {
        match unmatched
            .iter()
            .position(|candidate| error.is_equal(*candidate))
        {
            Some(at) => {
                unmatched.swap_remove(at);
            }
            None => return false,
        }
    }
    unmatched.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SimpleError, TemplateError};

    fn x() -> SimpleError {
        SimpleError::new("x")
    }

    fn y() -> SimpleError {
        SimpleError::new("y")
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree = ErrorTree::new();
        assert!(!tree.has_errors());
        assert!(tree.root().is_root());
        assert!(tree.root().errors().is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root().fields().count(), 0);
    }

    #[test]
    fn test_down_field_reuses_existing_child() {
        let mut tree = ErrorTree::new();
        let first = tree.root_mut().down_field("user").id();
        let second = tree.root_mut().down_field("user").id();
        assert_eq!(first, second);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_up_returns_parent_and_stops_at_root() {
        let mut tree = ErrorTree::new();
        let leaf = tree.root_mut().down_field("a").down_index(3);
        assert!(!leaf.is_root());
        let parent = leaf.up();
        let parent_id = parent.id();
        let root = parent.up().up();
        assert!(root.is_root());

        let node = tree.node(parent_id).unwrap();
        assert_eq!(node.path().to_string(), "/a");
        assert!(node.up().is_root());
        assert_eq!(node.up().up().id(), tree.root().id());
    }

    #[test]
    fn test_read_navigation_does_not_create_nodes() {
        let mut tree = ErrorTree::new();
        tree.add_at(&Path::root().down_field("a"), x());
        let before = tree.node_count();

        assert!(!tree.has_error_at(&Path::parse("/b/c[2]").unwrap()));
        assert!(tree.root().field("b").is_none());
        assert!(tree.root().index(0).is_none());
        assert_eq!(tree.node_count(), before);
    }

    #[test]
    fn test_has_error_at_ignores_children() {
        let mut tree = ErrorTree::new();
        tree.add_at(&Path::parse("/user/name").unwrap(), x());

        assert!(tree.has_error_at(&Path::parse("/user/name").unwrap()));
        assert!(!tree.has_error_at(&Path::parse("/user").unwrap()));
        assert!(tree.root().field("user").unwrap().has_errors());
    }

    #[test]
    fn test_relative_resolution_from_a_subtree() {
        let mut tree = ErrorTree::new();
        tree.add_at(&Path::parse("/users[1]/email").unwrap(), x());

        let users = tree.root().field("users").unwrap();
        let relative = Path::parse("[1]/email").unwrap();
        assert!(users.has_error_at(&relative));
        assert!(users.is_error_at(&relative, &x()));
        assert!(!users.is_error_at(&relative, &y()));
    }

    #[test]
    fn test_multiset_equality_counts_duplicates() {
        let mut a = ErrorTree::new();
        a.add_at(&Path::root(), x());
        a.add_at(&Path::root(), x());
        a.add_at(&Path::root(), y());

        let mut b = ErrorTree::new();
        b.add_at(&Path::root(), x());
        b.add_at(&Path::root(), y());
        b.add_at(&Path::root(), y());

        assert!(!a.is_equal(&b));
        assert!(!b.is_equal(&a));

        let mut c = ErrorTree::new();
        c.add_at(&Path::root(), y());
        c.add_at(&Path::root(), x());
        c.add_at(&Path::root(), x());
        assert!(a.is_equal(&c));
    }

    #[test]
    fn test_equality_detects_structure_differences() {
        let mut indexed = ErrorTree::new();
        indexed.add_at(&Path::parse("/tags[0]").unwrap(), x());

        let mut named = ErrorTree::new();
        named.add_at(&Path::parse("/tags/first").unwrap(), x());
        assert!(!indexed.is_equal(&named));

        let mut wider = ErrorTree::new();
        wider.add_at(&Path::parse("/tags[0]").unwrap(), x());
        wider.add_at(&Path::parse("/tags[1]").unwrap(), x());
        assert!(!indexed.is_equal(&wider));

        let mut other_variant = ErrorTree::new();
        other_variant.add_at(&Path::parse("/tags[0]").unwrap(), TemplateError::new("x"));
        assert!(!indexed.is_equal(&other_variant));
    }

    #[test]
    fn test_equality_of_sparse_indices_compares_keys() {
        let mut a = ErrorTree::new();
        a.add_at(&Path::parse("/items[2]").unwrap(), x());
        a.add_at(&Path::parse("/items[7]").unwrap(), y());

        let mut b = ErrorTree::new();
        b.add_at(&Path::parse("/items[7]").unwrap(), y());
        b.add_at(&Path::parse("/items[2]").unwrap(), x());

        let mut c = ErrorTree::new();
        c.add_at(&Path::parse("/items[2]").unwrap(), x());
        c.add_at(&Path::parse("/items[8]").unwrap(), y());

        assert!(a.is_equal(&b));
        assert!(!a.is_equal(&c));
    }

    #[test]
    fn test_empty_child_map_differs_from_absent_map() {
        let mut visited = ErrorTree::new();
        visited.root_mut().down_field("a");

        let untouched = ErrorTree::new();
        assert!(!visited.has_errors());
        assert!(!visited.is_equal(&untouched));
    }

    #[test]
    fn test_merge_appends_at_matching_paths() {
        let mut a = ErrorTree::new();
        a.add_at(&Path::parse("/user/name").unwrap(), x());

        let mut b = ErrorTree::new();
        b.add_at(&Path::parse("/user/name").unwrap(), y());
        b.add_at(&Path::parse("/tags[0]").unwrap(), x());

        let merged = a.combine(b);
        assert_eq!(merged.error_count(), 3);
        assert_eq!(merged.errors_at(&Path::parse("/user/name").unwrap()).len(), 2);
        assert!(merged.is_error_at(&Path::parse("/tags[0]").unwrap(), &x()));
    }

    #[test]
    fn test_entries_and_display() {
        let mut tree = ErrorTree::new();
        tree.add_at(&Path::parse("/b").unwrap(), y());
        tree.add_at(&Path::parse("/a[1]").unwrap(), x());

        let entries: Vec<String> = tree
            .entries()
            .into_iter()
            .map(|(path, error)| format!("{}={}", path, error))
            .collect();
        assert_eq!(entries, vec!["/b=y", "/a[1]=x"]);

        let display = tree.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("1. /b: y"));
        assert!(display.contains("2. /a[1]: x"));
    }
}
