//! The scene graph of one diagram.
//!
//! Composers push drawables into a [`Scene`] and never touch markup. The scene
//! is serialized in one final step by [`Scene::to_document`], which walks the
//! nodes in insertion order and stacks their output by [`RenderLayer`].

use log::debug;

use crate::{
    draw::{
        Arrow, Dot, Drawable, Label, LabeledBox, LayeredOutput, Line, Polyline, Rect, RenderLayer,
        Text,
    },
    geometry::{Bounds, Point, Size},
    theme::{Theme, ThemeError, ThemeToken},
};

/// One drawable in a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Box(LabeledBox),
    Arrow(Arrow),
    Label(Label),
    Text(Text),
    Rect(Rect),
    Line(Line),
    Polyline(Polyline),
    Dot(Dot),
}

impl Node {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Self::Box(b) => b,
            Self::Arrow(a) => a,
            Self::Label(l) => l,
            Self::Text(t) => t,
            Self::Rect(r) => r,
            Self::Line(l) => l,
            Self::Polyline(p) => p,
            Self::Dot(d) => d,
        }
    }
}

impl Drawable for Node {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        self.as_drawable().render_to_layers(theme)
    }

    fn bounds(&self) -> Bounds {
        self.as_drawable().bounds()
    }
}

macro_rules! impl_from_drawable {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_drawable!(
    Box(LabeledBox),
    Arrow(Arrow),
    Label(Label),
    Text(Text),
    Rect(Rect),
    Line(Line),
    Polyline(Polyline),
    Dot(Dot),
);

/// A diagram before serialization: a view box, an optional page fill and the
/// drawables in insertion order.
///
/// # Examples
///
/// ```
/// # use plainsight_core::draw::{Arrow, LabeledBox, Scene};
/// # use plainsight_core::geometry::{Point, Size};
/// # use plainsight_core::identifier::MarkerIdGenerator;
/// # use plainsight_core::theme::{Theme, ThemeToken};
/// let mut ids = MarkerIdGenerator::new();
/// let mut scene = Scene::new(Size::new(240.0, 60.0));
/// scene.add(LabeledBox::new(0.0, 5.0, "Message", ThemeToken::Aqua).with_size(100.0, 45.0));
/// scene.add(Arrow::new(&mut ids, Point::new(100.0, 28.0), Point::new(130.0, 28.0)));
/// scene.add(LabeledBox::new(140.0, 5.0, "ML-KEM", ThemeToken::Green).with_size(90.0, 45.0));
///
/// let markup = scene.render(Theme::gruvbox()).unwrap();
/// assert!(markup.contains(r#"viewBox="0 0 240 60""#));
/// assert_eq!(scene.boxes().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    view_box: Bounds,
    background: Option<ThemeToken>,
    nodes: Vec<Node>,
}

impl Scene {
    /// Creates an empty scene whose view box starts at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            view_box: Bounds::new_from_top_left(Point::default(), size),
            background: None,
            nodes: Vec::new(),
        }
    }

    /// Fills the whole view box with `token` beneath every node.
    pub fn with_background(mut self, token: ThemeToken) -> Self {
        self.background = Some(token);
        self
    }

    /// Appends a drawable; later nodes paint over earlier ones on the same layer.
    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn view_box(&self) -> Bounds {
        self.view_box
    }

    pub fn background(&self) -> Option<ThemeToken> {
        self.background
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates over the labeled boxes in insertion order.
    pub fn boxes(&self) -> impl Iterator<Item = &LabeledBox> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Box(b) => Some(b),
            _ => None,
        })
    }

    /// Iterates over the arrows in insertion order.
    pub fn arrows(&self) -> impl Iterator<Item = &Arrow> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Arrow(a) => Some(a),
            _ => None,
        })
    }

    /// Iterates over the annotation labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Label(l) => Some(l),
            _ => None,
        })
    }

    /// Serializes the scene into a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] for the first color token `theme`
    /// does not define. No document is produced in that case.
    pub fn to_document(&self, theme: &Theme) -> Result<svg::Document, ThemeError> {
        let mut output = LayeredOutput::new();

        if let Some(token) = self.background {
            let page = Rect::new(self.view_box.min_point(), self.view_box.to_size(), token)
                .on_layer(RenderLayer::Background);
            output.merge(page.render_to_layers(theme)?);
        }
        for node in &self.nodes {
            output.merge(node.render_to_layers(theme)?);
        }

        debug!(nodes = self.nodes.len(), view_box = self.view_box.to_view_box(); "Serializing scene");

        let doc = svg::Document::new().set("viewBox", self.view_box.to_view_box());
        Ok(output.render().into_iter().fold(doc, |doc, node| doc.add(node)))
    }

    /// Serializes the scene to SVG markup.
    pub fn render(&self, theme: &Theme) -> Result<String, ThemeError> {
        Ok(self.to_document(theme)?.to_string())
    }
}
