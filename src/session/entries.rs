//! Mutation operations for the repeatable entity kinds: experience,
//! education, skill groups, and projects.
//!
//! The contract is uniform across kinds: `add_*` appends a blank entry
//! with a fresh id, `update_*` shallow-merges a patch into the entry
//! matching the id, `remove_*` drops it. An unmatched id is a silently
//! ignored no-op, never an error: ids are always generated by the session
//! itself, so a miss means a stale UI reference, which should not crash
//! the session.
//!
//! Highlight operations address by position. Indices are NOT stable across
//! removal: removing index `i` shifts every subsequent index down by one,
//! so callers must not cache an index across a removal.

use crate::ident::create_id;
use crate::model::{
    Education, EducationPatch, Experience, ExperiencePatch, Project, ProjectPatch, SkillGroup,
    SkillGroupPatch,
};
use crate::session::ResumeSession;
use crate::store::StorageBackend;

impl<B: StorageBackend> ResumeSession<B> {
    // --- Experience ---

    pub fn add_experience(&mut self) {
        let entry = Experience::new(create_id("exp"));
        self.mutate(|doc| doc.experience.push(entry));
    }

    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) {
        self.mutate(|doc| {
            if let Some(e) = doc.experience.iter_mut().find(|e| e.id == id) {
                patch.apply(e);
            }
        });
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.mutate(|doc| doc.experience.retain(|e| e.id != id));
    }

    pub fn add_experience_highlight(&mut self, id: &str) {
        self.mutate(|doc| {
            if let Some(e) = doc.experience.iter_mut().find(|e| e.id == id) {
                e.highlights.push(String::new());
            }
        });
    }

    pub fn update_experience_highlight(&mut self, id: &str, index: usize, value: String) {
        self.mutate(|doc| {
            if let Some(h) = doc
                .experience
                .iter_mut()
                .find(|e| e.id == id)
                .and_then(|e| e.highlights.get_mut(index))
            {
                *h = value;
            }
        });
    }

    pub fn remove_experience_highlight(&mut self, id: &str, index: usize) {
        self.mutate(|doc| {
            if let Some(e) = doc.experience.iter_mut().find(|e| e.id == id) {
                if index < e.highlights.len() {
                    e.highlights.remove(index);
                }
            }
        });
    }

    // --- Education ---

    pub fn add_education(&mut self) {
        let entry = Education::new(create_id("edu"));
        self.mutate(|doc| doc.education.push(entry));
    }

    pub fn update_education(&mut self, id: &str, patch: EducationPatch) {
        self.mutate(|doc| {
            if let Some(e) = doc.education.iter_mut().find(|e| e.id == id) {
                patch.apply(e);
            }
        });
    }

    pub fn remove_education(&mut self, id: &str) {
        self.mutate(|doc| doc.education.retain(|e| e.id != id));
    }

    // --- Skill groups ---

    pub fn add_skill_group(&mut self) {
        let entry = SkillGroup::new(create_id("sk"));
        self.mutate(|doc| doc.skills.push(entry));
    }

    pub fn update_skill_group(&mut self, id: &str, patch: SkillGroupPatch) {
        self.mutate(|doc| {
            if let Some(g) = doc.skills.iter_mut().find(|g| g.id == id) {
                patch.apply(g);
            }
        });
    }

    pub fn remove_skill_group(&mut self, id: &str) {
        self.mutate(|doc| doc.skills.retain(|g| g.id != id));
    }

    // --- Projects ---

    pub fn add_project(&mut self) {
        let entry = Project::new(create_id("proj"));
        self.mutate(|doc| doc.projects.push(entry));
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) {
        self.mutate(|doc| {
            if let Some(p) = doc.projects.iter_mut().find(|p| p.id == id) {
                patch.apply(p);
            }
        });
    }

    pub fn remove_project(&mut self, id: &str) {
        self.mutate(|doc| doc.projects.retain(|p| p.id != id));
    }

    pub fn add_project_highlight(&mut self, id: &str) {
        self.mutate(|doc| {
            if let Some(p) = doc.projects.iter_mut().find(|p| p.id == id) {
                p.highlights.push(String::new());
            }
        });
    }

    pub fn update_project_highlight(&mut self, id: &str, index: usize, value: String) {
        self.mutate(|doc| {
            if let Some(h) = doc
                .projects
                .iter_mut()
                .find(|p| p.id == id)
                .and_then(|p| p.highlights.get_mut(index))
            {
                *h = value;
            }
        });
    }

    pub fn remove_project_highlight(&mut self, id: &str, index: usize) {
        self.mutate(|doc| {
            if let Some(p) = doc.projects.iter_mut().find(|p| p.id == id) {
                if index < p.highlights.len() {
                    p.highlights.remove(index);
                }
            }
        });
    }
}
