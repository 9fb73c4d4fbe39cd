/// Session turn tests.
///
/// Uses the scripted and mock providers so every scenario is deterministic
/// and requires no network access.
#[cfg(test)]
mod session_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use mmca_config::{Config, PreamblePolicy};
    use mmca_model::{
        builtin_memories, citation, MockMemories, MockProvider, ProviderError, ResponseProvider, ScriptedMockProvider,
    };
    use mmca_segment::Label;
    use tokio::sync::mpsc;

    use crate::{Action, Role, Session, SessionEvent};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn session_with(provider: impl ResponseProvider + 'static, config: Config) -> Session {
        Session::new(Arc::new(config), Arc::new(provider), Arc::new(MockMemories::default()))
    }

    fn drain(mut rx: mpsc::Receiver<SessionEvent>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    async fn ask(session: &mut Session, prompt: &str) -> Vec<SessionEvent> {
        let (tx, rx) = mpsc::channel(16);
        session.dispatch(Action::SetInput(prompt.into()));
        session.submit(&tx).await.unwrap();
        drop(tx);
        drain(rx)
    }

    // ── Basic turn ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn greeting_is_present_before_any_turn() {
        let s = session_with(MockProvider::default(), Config::default());
        assert_eq!(s.state().messages.len(), 1);
        assert!(s.state().messages[0].content.starts_with("[Agent]"));
    }

    #[tokio::test]
    async fn mock_turn_appends_user_and_agent_messages() {
        let mut s = session_with(MockProvider::default(), Config::default());
        ask(&mut s, "你好").await;

        let msgs = &s.state().messages;
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].role, Role::User);
        assert_eq!(msgs[1].content, "你好");
        assert_eq!(msgs[2].role, Role::Agent);
        assert!(msgs[2].id.starts_with("agent-"));
        assert!(s.state().input.is_empty());
        assert!(!s.state().loading);
    }

    #[tokio::test]
    async fn agent_reply_event_carries_four_segments() {
        let mut s = session_with(MockProvider::default(), Config::default());
        let events = ask(&mut s, "問題").await;

        let segments = events
            .iter()
            .find_map(|e| match e {
                SessionEvent::AgentReply { segments, .. } => Some(segments.clone()),
                _ => None,
            })
            .unwrap();
        let labels: Vec<Label> = segments.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Label::A, Label::B, Label::C, Label::Agent]);
    }

    #[tokio::test]
    async fn events_are_emitted_in_turn_order() {
        let mut s = session_with(ScriptedMockProvider::always_text("[A] ok"), Config::default());
        let events = ask(&mut s, "q").await;
        assert!(matches!(events[0], SessionEvent::UserMessage(_)));
        assert!(matches!(events[1], SessionEvent::Loading(true)));
        assert!(matches!(events[2], SessionEvent::Loading(false)));
        assert!(matches!(events[3], SessionEvent::AgentReply { .. }));
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut s = session_with(MockProvider::default(), Config::default());
        let (tx, rx) = mpsc::channel(4);
        s.dispatch(Action::SetInput("   \n".into()));
        assert!(s.submit(&tx).await.unwrap().is_none());
        drop(tx);
        assert!(drain(rx).is_empty());
        assert_eq!(s.state().messages.len(), 1);
    }

    #[tokio::test]
    async fn blank_line_with_citation_is_ignored() {
        let mut s = session_with(MockProvider::default(), Config::default());
        s.load_memories().await.unwrap();
        let memory = s.state().memories[0].clone();

        let (tx, rx) = mpsc::channel(4);
        for line in ["", "  \t "] {
            assert!(s.submit_line(line.into(), Some(&memory), &tx).await.unwrap().is_none());
        }
        drop(tx);
        assert!(drain(rx).is_empty());
        assert_eq!(s.state().messages.len(), 1);
        assert!(s.state().input.is_empty());
    }

    #[tokio::test]
    async fn submit_line_prefixes_citation() {
        let provider = ScriptedMockProvider::always_text("[Agent] ok");
        let last_prompt = provider.last_prompt.clone();
        let mut s = session_with(provider, Config::default());
        s.load_memories().await.unwrap();
        let memory = s.state().memories[1].clone();

        let (tx, _rx) = mpsc::channel(16);
        let reply = s.submit_line("下一步？".into(), Some(&memory), &tx).await.unwrap();
        assert!(reply.is_some());

        let sent = last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(sent, citation::cite(&memory, "下一步？"));
    }

    // ── Failure handling ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn provider_failure_substitutes_fallback() {
        let mut s = session_with(ScriptedMockProvider::failing("offline"), Config::default());
        let events = ask(&mut s, "q").await;

        let reply = s.state().last_message().unwrap();
        assert!(reply.id.starts_with("error-"));
        assert_eq!(reply.content, Config::default().chat.fallback_message);
        assert!(events.iter().any(|e| matches!(e, SessionEvent::ProviderFailed(m) if m.contains("offline"))));
        assert!(!s.state().loading);
    }

    #[tokio::test]
    async fn fallback_is_segmented_as_agent() {
        let mut s = session_with(ScriptedMockProvider::new(vec![Err(ProviderError::Exhausted)]), Config::default());
        ask(&mut s, "q").await;
        let reply = s.state().last_message().unwrap().clone();
        let segments = s.segments_for(&reply);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, Label::Agent);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let mut config = Config::default();
        config.provider.timeout_secs = 1;
        let provider = ScriptedMockProvider::always_text("[A] late").with_delay(Duration::from_secs(5));
        let mut s = session_with(provider, config);
        let events = ask(&mut s, "q").await;
        assert!(events.iter().any(|e| matches!(e, SessionEvent::ProviderFailed(m) if m.contains("timed out"))));
        assert!(s.state().last_message().unwrap().id.starts_with("error-"));
    }

    // ── Memories and citations ────────────────────────────────────────────────

    #[tokio::test]
    async fn cited_memory_reaches_provider() {
        let provider = ScriptedMockProvider::always_text("[Agent] ok");
        let last_prompt = provider.last_prompt.clone();
        let mut s = session_with(provider, Config::default());
        assert_eq!(s.load_memories().await.unwrap(), 3);

        let memory = s.state().memories[0].clone();
        s.dispatch(Action::SetInput("延伸？".into()));
        s.dispatch(Action::CiteMemory(memory.clone()));
        let (tx, _rx) = mpsc::channel(16);
        s.submit(&tx).await.unwrap();

        let sent = last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(citation::cited_title(&sent).as_deref(), Some(memory.title.as_str()));
    }

    #[tokio::test]
    async fn memory_list_comes_from_the_provider() {
        let only = builtin_memories().into_iter().take(1).collect::<Vec<_>>();
        let memories = MockMemories::default().with_memories(only.clone());
        let mut s = Session::new(Arc::new(Config::default()), Arc::new(MockProvider::default()), Arc::new(memories));

        assert_eq!(s.load_memories().await.unwrap(), 1);
        assert_eq!(s.state().memories, only);
        assert!(s.state().memory_by_title("Firestore 記憶體結構").is_none());
    }

    // ── Segmentation ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn user_messages_are_not_segmented() {
        let mut s = session_with(MockProvider::default(), Config::default());
        ask(&mut s, "[A] looks like a tag").await;
        let user = s.state().messages[1].clone();
        assert!(s.segments_for(&user).is_empty());
    }

    #[tokio::test]
    async fn repeated_lookup_is_memoized() {
        let mut s = session_with(MockProvider::default(), Config::default());
        let greeting = s.state().messages[0].clone();
        let a = s.segments_for(&greeting);
        let b = s.segments_for(&greeting);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn configured_preamble_policy_is_used() {
        let mut config = Config::default();
        config.segment.preamble = PreamblePolicy::Keep;
        let mut s = session_with(ScriptedMockProvider::always_text("intro [A] body"), config);
        ask(&mut s, "q").await;
        let reply = s.state().last_message().unwrap().clone();
        let labels: Vec<Label> = s.segments_for(&reply).iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Label::Unknown, Label::A]);
    }
}
