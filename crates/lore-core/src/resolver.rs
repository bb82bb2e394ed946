//! Article content resolver
//!
//! Drives reference resolution for the article currently on screen.
//!
//! # Workflow
//! 1. [`ArticleContentResolver::resolve`] installs the article and claims a
//!    new [`Generation`] immediately, clearing both resolved lists
//! 2. If the article carries both reference lists, one lookup per id is
//!    started; the category and contributor batches run side by side
//! 3. Each batch is all-or-nothing: the first failed lookup fails the batch
//!    and its list stays empty
//! 4. A finished batch commits only if its generation is still current

use crate::config::LoreConfig;
use crate::generation::Generation;
use crate::identity::IdentityProvider;
use crate::view::{ArticleView, EditRoute};
use futures::future::try_join_all;
use lore_content::{CommonMarkRenderer, MarkdownRenderer};
use lore_model::{Article, Category, Collection, Contributor, Entity};
use lore_store::{fetch, DocumentLookup, LookupError};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

/// Result of one batch within a resolution
#[derive(Debug)]
pub enum BatchOutcome {
    /// Article lacked a reference list; nothing was looked up
    Skipped,
    /// List replaced with this many resolved entities
    Committed(usize),
    /// A lookup failed; the list stays empty
    Failed(LookupError),
    /// A newer resolution started first; result discarded
    Superseded,
}

impl BatchOutcome {
    /// Check if the batch wrote its list
    #[inline]
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// Check if the batch failed
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Check if the batch was discarded as stale
    #[inline]
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// What one call to [`ArticleContentResolver::resolve`] did
#[derive(Debug)]
pub struct ResolutionReport {
    /// Generation the call ran under
    pub generation: Generation,
    /// False when the same article was already installed
    pub changed: bool,
    /// Category batch
    pub categories: BatchOutcome,
    /// Contributor batch
    pub contributors: BatchOutcome,
}

impl ResolutionReport {
    fn unchanged(generation: Generation) -> Self {
        Self {
            generation,
            changed: false,
            categories: BatchOutcome::Skipped,
            contributors: BatchOutcome::Skipped,
        }
    }
}

/// State owned by the current generation
#[derive(Debug, Default)]
struct Resolved {
    generation: Generation,
    article: Option<Arc<Article>>,
    categories: Vec<Category>,
    contributors: Vec<Contributor>,
}

impl Resolved {
    /// Install `article` under a fresh generation, unless it is already current
    fn claim(&mut self, article: &Arc<Article>) -> Option<Generation> {
        if self
            .article
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, article))
        {
            return None;
        }

        self.generation = self.generation.next();
        self.article = Some(Arc::clone(article));
        self.categories.clear();
        self.contributors.clear();
        Some(self.generation)
    }
}

/// Resolves and presents one article at a time
///
/// Cloning is cheap; clones share the same resolved state, so a clone can
/// drive resolution from a spawned task while another reads views.
#[derive(Clone)]
pub struct ArticleContentResolver {
    store: Arc<dyn DocumentLookup>,
    identity: Arc<dyn IdentityProvider>,
    renderer: Arc<dyn MarkdownRenderer>,
    edit_route: EditRoute,
    state: Arc<Mutex<Resolved>>,
}

impl std::fmt::Debug for ArticleContentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleContentResolver")
            .field("edit_route", &self.edit_route)
            .field("generation", &self.current_generation())
            .finish_non_exhaustive()
    }
}

impl ArticleContentResolver {
    /// Create resolver over a store and an identity source
    #[must_use]
    pub fn new(store: Arc<dyn DocumentLookup>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store,
            identity,
            renderer: Arc::new(CommonMarkRenderer::new()),
            edit_route: EditRoute::default(),
            state: Arc::new(Mutex::new(Resolved::default())),
        }
    }

    /// Apply configuration
    #[must_use]
    pub fn with_config(mut self, config: &LoreConfig) -> Self {
        self.edit_route = EditRoute::from(&config.routes);
        self
    }

    /// Use a different markdown renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Generation of the most recently installed article
    #[must_use]
    pub fn current_generation(&self) -> Generation {
        self.state.lock().generation
    }

    /// Currently installed article
    #[must_use]
    pub fn article(&self) -> Option<Arc<Article>> {
        self.state.lock().article.clone()
    }

    /// Install `article` and resolve its references
    ///
    /// The article is installed and its generation claimed when this is
    /// called, not when the returned future is first polled; call order
    /// decides which resolution is newest. Passing the already installed
    /// `Arc` again does nothing. Lookup failures never escape: they are
    /// logged and reported per batch.
    pub fn resolve(
        &self,
        article: Arc<Article>,
    ) -> impl Future<Output = ResolutionReport> + Send + 'static {
        let claimed = self.state.lock().claim(&article);
        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);

        async move {
            let Some(generation) = claimed else {
                let current = state.lock().generation;
                tracing::debug!(%current, title = %article.title, "article unchanged");
                return ResolutionReport::unchanged(current);
            };

            let Some((cat_ids, user_ids)) = article.references() else {
                tracing::debug!(%generation, title = %article.title, "no references to resolve");
                return ResolutionReport {
                    generation,
                    changed: true,
                    categories: BatchOutcome::Skipped,
                    contributors: BatchOutcome::Skipped,
                };
            };

            tracing::info!(
                %generation,
                title = %article.title,
                categories = cat_ids.len(),
                contributors = user_ids.len(),
                "resolving article references"
            );

            let categories = async {
                let result = resolve_batch::<Category, _>(&*store, cat_ids).await;
                commit(&state, generation, Collection::Categories, result, |resolved, list| {
                    resolved.categories = list;
                })
            };
            let contributors = async {
                let result = resolve_batch::<Contributor, _>(&*store, user_ids).await;
                commit(&state, generation, Collection::Users, result, |resolved, list| {
                    resolved.contributors = list;
                })
            };
            let (categories, contributors) = futures::join!(categories, contributors);

            ResolutionReport {
                generation,
                changed: true,
                categories,
                contributors,
            }
        }
    }

    /// Snapshot of the installed article's presentation state
    ///
    /// `None` until an article has been installed. The edit link reflects
    /// the viewer's role at the time of the call.
    #[must_use]
    pub fn view(&self) -> Option<ArticleView> {
        let (article, categories, contributors) = {
            let state = self.state.lock();
            (
                state.article.clone()?,
                state.categories.clone(),
                state.contributors.clone(),
            )
        };

        let edit = self
            .identity
            .is_admin()
            .then(|| self.edit_route.link(&article.title));

        Some(ArticleView::assemble(
            &article,
            &*self.renderer,
            categories,
            contributors,
            edit,
        ))
    }
}

/// Look up every id concurrently; order-preserving, fails on first error
async fn resolve_batch<E, I>(store: &dyn DocumentLookup, ids: &[I]) -> Result<Vec<E>, LookupError>
where
    E: Entity,
    I: AsRef<str>,
{
    try_join_all(ids.iter().map(|id| fetch::<E>(store, id.as_ref()))).await
}

fn commit<E>(
    state: &Mutex<Resolved>,
    generation: Generation,
    collection: Collection,
    result: Result<Vec<E>, LookupError>,
    apply: impl FnOnce(&mut Resolved, Vec<E>),
) -> BatchOutcome {
    let mut resolved = state.lock();
    if resolved.generation != generation {
        tracing::debug!(
            %generation,
            current = %resolved.generation,
            %collection,
            "discarding superseded batch"
        );
        return BatchOutcome::Superseded;
    }

    match result {
        Ok(list) => {
            let count = list.len();
            apply(&mut resolved, list);
            tracing::info!(%generation, %collection, count, "batch committed");
            BatchOutcome::Committed(count)
        }
        Err(error) => {
            tracing::warn!(%generation, %collection, %error, "batch failed, list left empty");
            BatchOutcome::Failed(error)
        }
    }
}
