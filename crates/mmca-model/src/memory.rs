// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A stored summary of a past multi-model conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// The original tagged response the memory was taken from.
    pub full_content: String,
    pub timestamp: DateTime<Utc>,
}

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, hour, min, 0).single().unwrap_or_default()
}

/// The fixed memory list served by [`crate::MockMemories`].
pub fn builtin_memories() -> Vec<Memory> {
    vec![
        Memory {
            id: "mem-1".into(),
            title: "PWA 部署策略".into(),
            summary: "討論了使用 Codespaces 進行開發，Render 作為後端，並將前端部署為 PWA。".into(),
            full_content: "[A] To deploy our MMCA system, we should use GitHub Codespaces for development, a Render Web Service for our Node.js API proxy, and a static PWA for the frontend. [B] The plan is solid. The API Key must be an environment variable on Render, not exposed to the PWA. [C] This architecture also supports CI/CD via Git-hooks on Render for automatic deployments from the main branch. [Agent] Approved plan: We will proceed with the Codespaces -> Render (Backend) -> PWA (Frontend) architecture. The key will be secured on the backend, and CI/CD will be enabled.".into(),
            timestamp: at(12, 10, 0),
        },
        Memory {
            id: "mem-2".into(),
            title: "MMCA 的 UI 規格".into(),
            summary: "UI 必須解析標記後的回應，並將其顯示在獨立的氣泡中。同時也需要一個記憶側邊欄。".into(),
            full_content: "[A] The frontend needs to parse responses from the agent, looking for [A], [B], [C], and [Agent] tags. [B] Correct. Each tagged section should be visually distinct to ensure traceability for the user. [C] We should also include a sidebar or modal where users can view and cite memories from Firestore. [Agent] Final UI spec: Implement a chat interface that parses and displays tagged responses in separate styled containers. Also, create a \"Memory Panel\" for viewing and citing past conversations.".into(),
            timestamp: at(12, 11, 30),
        },
        Memory {
            id: "mem-3".into(),
            title: "Firestore 記憶體結構".into(),
            summary: "定義了在 Firestore 中儲存記憶日誌的 JSON 結構，每次 Agent 回應後觸發。".into(),
            full_content: "[A] Let's define the memory structure as a JSON object containing date, theme, summaries of model outputs, and the final Agent decision. [B] The structure is logical. It should be written to Firestore at the path /artifacts/{appId}/users/{userId}/memory_logs. [C] This automatic, structured logging will be crucial for the RAG features outlined in Scene 2 and 3. [Agent] The memory log will be a JSON object with keys: date, theme, material_summary, model_a_conclusion, model_b_findings, model_c_additions, agent_final_decision. The backend will handle writing this to Firestore after receiving the final response.".into(),
            timestamp: at(12, 14, 0),
        },
    ]
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
