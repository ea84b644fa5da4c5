mod stage;
use stage::{Postprocess, Stage};

use crate::{query, Client, Result};

use tessel_core::{Error, Expr, Params, Value};

use indexmap::IndexMap;
use std::{fmt, pin::pin, sync::Arc};
use tokio::sync::OnceCell;
use tokio_stream::{Stream, StreamExt};

/// One window of a set, fetched on first access.
///
/// A page is built from a set, its `paginate` options and any stages that
/// should run on the service. Building or refining a page sends nothing.
/// The first call to [`Page::load`], [`Page::data`], [`Page::before`] or
/// [`Page::after`] executes the query, and the result is kept for the life
/// of the page (and of its clones).
///
/// Refining a page with [`Page::with_params`], [`Page::map`],
/// [`Page::filter`] or [`Page::postprocessing_map`] never changes it: each
/// returns a new, unloaded page.
///
/// ```no_run
/// # async fn example(client: tessel::Client) -> tessel::Result<()> {
/// use tessel::query::*;
/// use tokio_stream::StreamExt;
///
/// let page = client
///     .paginate(match_(index("all_spells"), Vec::<Expr>::new()), Params::new().size(10))
///     .map(lambda("ref", |r| get(r, Params::new())));
///
/// let mut windows = std::pin::pin!(page.each());
/// while let Some(window) = windows.next().await {
///     println!("{} spells", window?.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Page {
    client: Client,
    set: Expr,
    params: Params,

    /// Server-side stages, outermost last.
    stages: Vec<Stage>,

    /// Host-side maps, in declaration order.
    postprocessing: Vec<Postprocess>,

    state: Arc<OnceCell<Loaded>>,
}

#[derive(Debug, PartialEq)]
struct Loaded {
    data: Vec<Value>,
    before: Option<Value>,
    after: Option<Value>,
}

impl Page {
    pub fn new(client: Client, set: impl Into<Expr>, params: Params) -> Page {
        Page {
            client,
            set: set.into(),
            params,
            stages: vec![],
            postprocessing: vec![],
            state: Arc::new(OnceCell::new()),
        }
    }

    pub fn set(&self) -> &Expr {
        &self.set
    }

    /// A copy of the options this page is fetched with.
    pub fn params(&self) -> Params {
        self.params.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.initialized()
    }

    /// The query this page sends: `paginate` wrapped by each stage in turn.
    pub fn to_expr(&self) -> Expr {
        self.stages.iter().fold(
            query::paginate(self.set.clone(), self.params.clone()),
            |collection, stage| stage.apply(collection),
        )
    }

    /// Returns a page with `params` merged over the current ones.
    ///
    /// Setting either cursor (`after` or `before`, including to an explicit
    /// null) drops both cursors of the current params first, so the result
    /// never carries the two at once.
    pub fn with_params(&self, params: Params) -> Page {
        let mut merged = self.params.clone();

        if params.contains("after") || params.contains("before") {
            merged.remove("after");
            merged.remove("before");
        }

        merged.merge(&params);

        Page {
            params: merged,
            ..self.unloaded()
        }
    }

    /// Returns a page whose elements are mapped by `lambda` on the service.
    pub fn map(&self, lambda: impl Into<Expr>) -> Page {
        self.with_stage(Stage::Map(lambda.into()))
    }

    /// Returns a page keeping the elements for which `lambda` is true.
    pub fn filter(&self, lambda: impl Into<Expr>) -> Page {
        self.with_stage(Stage::Filter(lambda.into()))
    }

    /// Returns a page whose elements are passed through `f` once decoded,
    /// after every server-side stage.
    pub fn postprocessing_map(&self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Page {
        let mut page = self.unloaded();
        page.postprocessing.push(Postprocess::new(f));
        page
    }

    /// Fetches the page if it has not been fetched yet.
    ///
    /// Returns whether this call performed the fetch.
    pub async fn load(&self) -> Result<bool> {
        let mut fetched = false;

        self.state
            .get_or_try_init(|| {
                fetched = true;
                self.fetch()
            })
            .await?;

        Ok(fetched)
    }

    pub async fn data(&self) -> Result<&[Value]> {
        Ok(&self.loaded().await?.data)
    }

    /// Cursor to the previous window, if there is one.
    pub async fn before(&self) -> Result<Option<&Value>> {
        Ok(self.loaded().await?.before.as_ref())
    }

    /// Cursor to the next window, if there is one.
    pub async fn after(&self) -> Result<Option<&Value>> {
        Ok(self.loaded().await?.after.as_ref())
    }

    /// The window following this one, or `None` at the end of the set.
    pub async fn page_after(&self) -> Result<Option<Page>> {
        Ok(self
            .after()
            .await?
            .map(|cursor| self.with_params(Params::new().after(cursor.clone()))))
    }

    /// The window preceding this one, or `None` at the start of the set.
    pub async fn page_before(&self) -> Result<Option<Page>> {
        Ok(self
            .before()
            .await?
            .map(|cursor| self.with_params(Params::new().before(cursor.clone()))))
    }

    /// Walks forward from this window, yielding the data of each.
    ///
    /// Every call starts a new walk from this page.
    pub fn each(&self) -> impl Stream<Item = Result<Vec<Value>>> + Send + 'static {
        let first = self.clone();

        async_stream::try_stream! {
            let mut page = first;

            loop {
                yield page.data().await?.to_vec();

                match page.page_after().await? {
                    Some(next) => page = next,
                    None => break,
                }
            }
        }
    }

    /// Walks backward from this window, yielding the data of each in its
    /// natural order.
    ///
    /// The first window yielded is this page's own. To walk from the end of
    /// the set, start from `with_params(Params::new().before(Value::Null))`.
    pub fn reverse_each(&self) -> impl Stream<Item = Result<Vec<Value>>> + Send + 'static {
        let first = self.clone();

        async_stream::try_stream! {
            let mut page = first;

            loop {
                yield page.data().await?.to_vec();

                match page.page_before().await? {
                    Some(prev) => page = prev,
                    None => break,
                }
            }
        }
    }

    /// Every element from this window to the end of the set.
    ///
    /// There is no size limit.
    pub async fn all(&self) -> Result<Vec<Value>> {
        let mut windows = pin!(self.each());
        let mut all = vec![];

        while let Some(window) = windows.next().await {
            all.extend(window?);
        }

        Ok(all)
    }

    /// Runs `lambda` on every element of the set, for its side effects.
    pub async fn foreach(&self, lambda: impl Into<Expr>) -> Result<()> {
        let page = self.with_stage(Stage::Foreach(lambda.into()));
        let mut windows = pin!(page.each());

        while let Some(window) = windows.next().await {
            window?;
        }

        Ok(())
    }

    fn with_stage(&self, stage: Stage) -> Page {
        let mut page = self.unloaded();
        page.stages.push(stage);
        page
    }

    /// A copy of this page's definition, not yet fetched.
    fn unloaded(&self) -> Page {
        Page {
            client: self.client.clone(),
            set: self.set.clone(),
            params: self.params.clone(),
            stages: self.stages.clone(),
            postprocessing: self.postprocessing.clone(),
            state: Arc::new(OnceCell::new()),
        }
    }

    async fn loaded(&self) -> Result<&Loaded> {
        self.state.get_or_try_init(|| self.fetch()).await
    }

    async fn fetch(&self) -> Result<Loaded> {
        let mut fields = match self.client.query(self.to_expr()).await? {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::unexpected_format(format!(
                    "expected a page object, got {other}"
                )))
            }
        };

        let data = match fields.shift_remove("data") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => vec![],
            Some(other) => {
                return Err(Error::unexpected_format(format!(
                    "expected page data to be an array, got {other}"
                )))
            }
        };

        let data = data
            .into_iter()
            .map(|value| {
                self.postprocessing
                    .iter()
                    .fold(value, |value, f| f.apply(value))
            })
            .collect();

        Ok(Loaded {
            data,
            before: cursor(&mut fields, "before"),
            after: cursor(&mut fields, "after"),
        })
    }
}

fn cursor(fields: &mut IndexMap<String, Value>, key: &str) -> Option<Value> {
    fields.shift_remove(key).filter(|value| !value.is_null())
}

/// Pages compare by their fetched contents. A page that has not been loaded
/// is not equal to anything, itself included.
impl PartialEq for Page {
    fn eq(&self, other: &Page) -> bool {
        match (self.state.get(), other.state.get()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Page");
        debug.field("query", &self.to_expr());

        if let Some(loaded) = self.state.get() {
            debug
                .field("data", &loaded.data)
                .field("before", &loaded.before)
                .field("after", &loaded.after);
        }

        debug.finish()
    }
}
