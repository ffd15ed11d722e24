// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-film presenter.
//!
//! Shows one film as a card and, on demand, as a details panel with its
//! comments and a composer. Edits travel upward as [`FilmIntent`]s; comment
//! changes are committed to the film record only when the panel closes.

use super::authors::AuthorPool;
use super::draft::CommentDraft;
use crate::models::{Comment, CommentId, CommentsModel, Emotion, Film, FilmFlag, FilmId, UpdateKind, UserAction};
use crate::view::{CancelGuard, CardGesture, ComponentId, DetailsGesture, KeyPress, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Card only.
    Default,
    /// Details panel open.
    Viewing,
}

/// Instance serial, unique per constructed presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresenterId(pub u64);

/// Request from a film presenter to its board.
#[derive(Debug, Clone, PartialEq)]
pub enum FilmIntent {
    ChangeData {
        action: UserAction,
        kind: UpdateKind,
        film: Film,
    },
    /// The presenter entered [`Mode::Viewing`]; every other one must close.
    ModeChanged(FilmId),
}

/// Shared state a film presenter works against.
pub struct FilmContext<'a> {
    pub page: &'a mut Page,
    pub comments: &'a mut CommentsModel,
    pub authors: &'a mut AuthorPool,
}

/// Everything that lives only while the details panel is open.
struct DetailsSession {
    panel: ComponentId,
    draft: CommentDraft,
    emotion: Option<Emotion>,
    text: String,
    // Released with the session
    _cancel: CancelGuard,
}

pub struct FilmPresenter {
    id: PresenterId,
    film: Film,
    card: Option<ComponentId>,
    session: Option<DetailsSession>,
}

impl FilmPresenter {
    pub fn new(id: PresenterId, film: Film) -> Self {
        Self {
            id,
            film,
            card: None,
            session: None,
        }
    }

    #[cfg(test)]
    pub fn id(&self) -> PresenterId {
        self.id
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    pub fn mode(&self) -> Mode {
        if self.session.is_some() {
            Mode::Viewing
        } else {
            Mode::Default
        }
    }

    #[cfg(test)]
    pub fn card_id(&self) -> Option<ComponentId> {
        self.card
    }

    #[cfg(test)]
    pub fn details_id(&self) -> Option<ComponentId> {
        self.session.as_ref().map(|s| s.panel)
    }

    /// Render `film` as this presenter's card, replacing the previous card in place.
    pub fn init(&mut self, film: Film, page: &mut Page) {
        self.film = film;
        self.card = Some(match self.card {
            Some(previous) => page.replace_card(previous, self.film.clone()),
            None => page.mount_card(self.film.clone()),
        });
        if let Some(session) = &self.session {
            page.update_details_film(session.panel, self.film.clone());
        }
    }

    /// Remove the card and any open panel. Returns the pending comment commit, if any.
    pub fn destroy(&mut self, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        log::debug!("Destroying presenter {} for {}", self.id.0, self.film.id);
        if let Some(card) = self.card.take() {
            ctx.page.unmount_card(card);
        }
        self.close_details(ctx)
    }

    /// Close the details panel if it is open.
    pub fn reset_view(&mut self, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        self.close_details(ctx)
    }

    pub fn handle_card(&mut self, gesture: CardGesture, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        match gesture {
            CardGesture::Click(region) if region.opens_details() => self.open_details(ctx),
            CardGesture::Click(_) => None,
            CardGesture::Toggle(flag) => Some(self.toggle(flag)),
        }
    }

    pub fn handle_details(&mut self, gesture: DetailsGesture, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        if self.session.is_none() {
            log::debug!("Ignoring details gesture for {}: panel closed", self.film.id);
            return None;
        }
        match gesture {
            DetailsGesture::Close => self.close_details(ctx),
            DetailsGesture::Toggle(flag) => Some(self.toggle(flag)),
            DetailsGesture::PickEmotion(emotion) => {
                self.edit_composer(ctx.page, |session| session.emotion = Some(emotion));
                None
            }
            DetailsGesture::EditText(text) => {
                self.edit_composer(ctx.page, |session| session.text = text);
                None
            }
            DetailsGesture::Key(key) => {
                if key.is_submit() {
                    self.submit_comment(ctx);
                }
                None
            }
            DetailsGesture::DeleteComment(id) => {
                self.delete_comment(id, ctx.page);
                None
            }
        }
    }

    /// Global cancel key.
    pub fn handle_cancel_key(&mut self, key: KeyPress, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        if !key.is_cancel() {
            return None;
        }
        self.close_details(ctx)
    }

    fn toggle(&self, flag: FilmFlag) -> FilmIntent {
        FilmIntent::ChangeData {
            action: UserAction::UpdateFilm,
            kind: UpdateKind::Minor,
            film: self.film.toggled(flag),
        }
    }

    fn open_details(&mut self, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        if self.session.is_some() {
            return None;
        }
        ctx.page.lock_scroll();
        let draft = CommentDraft::materialize(&self.film.comments, ctx.comments);
        let panel = ctx.page.mount_details(self.film.clone(), draft.items().to_vec());
        let cancel = ctx.page.cancel_keys().acquire(self.film.id);
        self.session = Some(DetailsSession {
            panel,
            draft,
            emotion: None,
            text: String::new(),
            _cancel: cancel,
        });
        log::info!("Opened details for {} ({})", self.film.id, self.film.title);
        Some(FilmIntent::ModeChanged(self.film.id))
    }

    fn close_details(&mut self, ctx: &mut FilmContext<'_>) -> Option<FilmIntent> {
        let session = self.session.take()?;
        ctx.page.unlock_scroll();
        ctx.page.unmount_details(session.panel);
        let comments = session.draft.commit(ctx.comments);
        log::info!("Closed details for {}, {} comments", self.film.id, comments.len());
        Some(FilmIntent::ChangeData {
            action: UserAction::UpdateFilm,
            kind: UpdateKind::Minor,
            film: self.film.with_comments(comments),
        })
    }

    fn edit_composer(&mut self, page: &mut Page, edit: impl FnOnce(&mut DetailsSession)) {
        if let Some(session) = self.session.as_mut() {
            edit(session);
            page.update_composer(session.panel, session.emotion, &session.text);
        }
    }

    fn submit_comment(&mut self, ctx: &mut FilmContext<'_>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // Composer keeps its text so nothing typed is lost
        let Some(id) = ctx.comments.next_id() else {
            log::error!("Can't post comment on {}: no free comment id", self.film.id);
            return;
        };
        let comment = Comment {
            id,
            author: ctx.authors.next_author(),
            text: std::mem::take(&mut session.text),
            emotion: session.emotion.take().unwrap_or_default(),
            date: chrono::Local::now().naive_local(),
        };
        log::info!("New comment {} on {} by {}", comment.id.0, self.film.id, comment.author);
        session.draft.add(comment, ctx.comments);
        ctx.page.update_comments(session.panel, session.draft.items().to_vec());
        ctx.page.update_composer(session.panel, None, "");
    }

    fn delete_comment(&mut self, id: CommentId, page: &mut Page) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.draft.remove(id) {
            log::info!("Deleted comment {} from {}", id.0, self.film.id);
            page.update_comments(session.panel, session.draft.items().to_vec());
        }
    }
}
