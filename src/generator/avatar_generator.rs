use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::attributes::email::EmailIdentity;
use crate::attributes::model::{AttributeRecord, Overrides};
use crate::attributes::resolve::resolve;
use crate::config::tables::AvatarConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::svg::render_scene;
use crate::scene::face::compose_face;
use crate::scene::identicon::{IdenticonStyle, compose_identicon};
use crate::scene::initials::compose_initials;
use crate::scene::primitive::Scene;
use crate::store::sink::{AvatarKind, AvatarSink, logical_name};
use crate::transform::pipeline::apply_transforms;
use crate::transform::spec::TransformSpec;

/// Options for [`AvatarGenerator::generate_batch_with`].
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Override the number of rayon worker threads. `None` uses the global pool.
    pub threads: Option<usize>,
}

/// Entry point for every avatar family.
///
/// The generator holds only immutable configuration, so one instance can be shared across
/// threads. Transform options are always passed per call.
#[derive(Clone, Debug)]
pub struct AvatarGenerator {
    config: Arc<AvatarConfig>,
}

impl AvatarGenerator {
    pub fn new(config: AvatarConfig) -> AvatarResult<Self> {
        Self::from_shared(Arc::new(config))
    }

    pub fn from_shared(config: Arc<AvatarConfig>) -> AvatarResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    pub fn resolve(&self, key: &str, overrides: &Overrides) -> AvatarResult<AttributeRecord> {
        resolve(&self.config, key, overrides)
    }

    /// Resolve and compose a face without serializing it.
    pub fn compose_face(&self, key: &str, overrides: &Overrides) -> AvatarResult<Scene> {
        let record = self.resolve(key, overrides)?;
        Ok(compose_face(&record, self.config.canvas))
    }

    /// Face avatar with the configured default transform.
    #[tracing::instrument(skip(self, overrides))]
    pub fn generate(&self, key: &str, overrides: &Overrides) -> AvatarResult<String> {
        self.face_markup(key, overrides, &self.config.transform)
    }

    /// Face avatar with an explicit transform instead of the configured default.
    #[tracing::instrument(skip(self, overrides))]
    pub fn generate_custom(
        &self,
        key: &str,
        overrides: &Overrides,
        transform: &TransformSpec,
    ) -> AvatarResult<String> {
        self.face_markup(key, overrides, transform)
    }

    /// Initials badge for an email address. The identity key derived from the local part
    /// drives the faint face details.
    #[tracing::instrument(skip(self, overrides))]
    pub fn generate_initials(&self, email: &str, overrides: &Overrides) -> AvatarResult<String> {
        let identity = EmailIdentity::parse(email)?;
        let record = self.resolve(&identity.identity_key, overrides)?;
        let scene = compose_initials(
            &identity.initials,
            &record,
            &self.config.initials_palette,
            self.config.canvas,
        )?;
        apply_transforms(&render_scene(&scene), &self.config.transform)
    }

    /// Geometric avatar from `seed`; `size` overrides the configured canvas with a square one.
    #[tracing::instrument(skip(self))]
    pub fn generate_identicon(
        &self,
        seed: &str,
        style: Option<IdenticonStyle>,
        size: Option<u32>,
    ) -> AvatarResult<String> {
        let canvas = match size {
            Some(side) => Canvas::square(side)?,
            None => self.config.canvas,
        };
        let scene = compose_identicon(seed, style.unwrap_or_default(), canvas)?;
        apply_transforms(&render_scene(&scene), &self.config.transform)
    }

    /// Face avatars for many keys on the global rayon pool.
    ///
    /// Each key gets its own result; a failing key never affects the others.
    pub fn generate_batch<K: AsRef<str> + Sync>(
        &self,
        keys: &[K],
        overrides: &Overrides,
    ) -> BTreeMap<String, AvatarResult<String>> {
        let out: BTreeMap<_, _> = keys
            .par_iter()
            .map(|k| self.batch_item(k.as_ref(), overrides))
            .collect();
        log_batch(&out);
        out
    }

    /// Like [`Self::generate_batch`], on a dedicated pool sized by `opts`.
    pub fn generate_batch_with<K: AsRef<str> + Sync>(
        &self,
        keys: &[K],
        overrides: &Overrides,
        opts: &BatchOpts,
    ) -> AvatarResult<BTreeMap<String, AvatarResult<String>>> {
        let pool = build_thread_pool(opts.threads)?;
        Ok(pool.install(|| self.generate_batch(keys, overrides)))
    }

    /// Store `markup` under the logical name for (`kind`, `key`).
    pub fn store(
        &self,
        sink: &dyn AvatarSink,
        kind: AvatarKind,
        key: &str,
        markup: &str,
    ) -> AvatarResult<String> {
        sink.store(&logical_name(kind, key), markup)
    }

    fn face_markup(
        &self,
        key: &str,
        overrides: &Overrides,
        transform: &TransformSpec,
    ) -> AvatarResult<String> {
        let scene = self.compose_face(key, overrides)?;
        apply_transforms(&render_scene(&scene), transform)
    }

    fn batch_item(&self, key: &str, overrides: &Overrides) -> (String, AvatarResult<String>) {
        let result = self
            .generate(key, overrides)
            .map_err(|e| AvatarError::batch_item(key, e));
        (key.to_string(), result)
    }
}

fn log_batch(results: &BTreeMap<String, AvatarResult<String>>) {
    let failed = results.values().filter(|r| r.is_err()).count();
    tracing::debug!(total = results.len(), failed, "batch finished");
}

fn build_thread_pool(threads: Option<usize>) -> AvatarResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AvatarError::invalid("batch 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AvatarError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/generator/avatar_generator.rs"]
mod tests;
