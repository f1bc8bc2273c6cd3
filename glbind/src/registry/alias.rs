use super::command::Command::{self, *};

/// Groups of entry points that share one call signature and may stand in for
/// each other: a core name and its vendor suffixed predecessors.
pub static ALIAS_GROUPS: &[&[Command]] = &[
    &[ActiveTexture, ActiveTextureARB],
    &[BeginQuery, BeginQueryARB],
    &[BindBuffer, BindBufferARB],
    &[BindBufferBase, BindBufferBaseEXT, BindBufferBaseNV],
    &[BindFramebuffer, BindFramebufferEXT],
    &[BindProgramARB, BindProgramNV],
    &[BindRenderbuffer, BindRenderbufferEXT],
    &[BindTexture, BindTextureEXT],
    &[BindVertexArray, BindVertexArrayAPPLE],
    &[BlendBarrierKHR, BlendBarrierNV],
    &[BlendColor, BlendColorEXT],
    &[BlendEquation, BlendEquationEXT],
    &[BlendEquationSeparate, BlendEquationSeparateEXT],
    &[BlendEquationi, BlendEquationiARB, BlendEquationIndexedAMD],
    &[BlendFuncSeparate, BlendFuncSeparateEXT, BlendFuncSeparateINGR],
    &[BlitFramebuffer, BlitFramebufferEXT],
    &[BufferData, BufferDataARB],
    &[BufferSubData, BufferSubDataARB],
    &[CheckFramebufferStatus, CheckFramebufferStatusEXT],
    &[ClampColor, ClampColorARB],
    &[ClearDepthf, ClearDepthfOES],
    &[ClientActiveTexture, ClientActiveTextureARB],
    &[CompressedTexImage2D, CompressedTexImage2DARB],
    &[DebugMessageCallback, DebugMessageCallbackARB],
    &[DebugMessageControl, DebugMessageControlARB],
    &[DebugMessageInsert, DebugMessageInsertARB],
    &[DeleteBuffers, DeleteBuffersARB],
    &[DeleteFramebuffers, DeleteFramebuffersEXT],
    &[DeleteProgramsARB, DeleteProgramsNV],
    &[DeleteVertexArrays, DeleteVertexArraysAPPLE],
    &[DepthRangef, DepthRangefOES],
    &[DisableVertexAttribArray, DisableVertexAttribArrayARB],
    &[DrawArrays, DrawArraysEXT],
    &[DrawArraysInstanced, DrawArraysInstancedARB, DrawArraysInstancedEXT],
    &[DrawBuffers, DrawBuffersARB, DrawBuffersATI],
    &[
        DrawElementsInstanced,
        DrawElementsInstancedARB,
        DrawElementsInstancedEXT,
    ],
    &[DrawRangeElements, DrawRangeElementsEXT],
    &[EnableVertexAttribArray, EnableVertexAttribArrayARB],
    &[EndQuery, EndQueryARB],
    &[FlushMappedBufferRange, FlushMappedBufferRangeAPPLE],
    &[FramebufferRenderbuffer, FramebufferRenderbufferEXT],
    &[FramebufferTexture, FramebufferTextureARB, FramebufferTextureEXT],
    &[FramebufferTexture2D, FramebufferTexture2DEXT],
    &[GenBuffers, GenBuffersARB],
    &[GenFramebuffers, GenFramebuffersEXT],
    &[GenProgramsARB, GenProgramsNV],
    &[GenQueries, GenQueriesARB],
    &[GenRenderbuffers, GenRenderbuffersEXT],
    &[GenVertexArrays, GenVertexArraysAPPLE],
    &[GenerateMipmap, GenerateMipmapEXT],
    &[GetDebugMessageLog, GetDebugMessageLogARB],
    &[GetGraphicsResetStatus, GetGraphicsResetStatusARB],
    &[GetQueryObjecti64v, GetQueryObjecti64vEXT],
    &[IsBuffer, IsBufferARB],
    &[MapBuffer, MapBufferARB],
    &[MaxShaderCompilerThreadsKHR, MaxShaderCompilerThreadsARB],
    &[MemoryBarrier, MemoryBarrierEXT],
    &[MinSampleShading, MinSampleShadingARB],
    &[MultiDrawArrays, MultiDrawArraysEXT],
    &[MultiDrawArraysIndirect, MultiDrawArraysIndirectAMD],
    &[MultiDrawArraysIndirectCount, MultiDrawArraysIndirectCountARB],
    &[MultiTexCoord2f, MultiTexCoord2fARB],
    &[
        PointParameterf,
        PointParameterfARB,
        PointParameterfEXT,
        PointParameterfSGIS,
    ],
    &[PolygonOffsetClamp, PolygonOffsetClampEXT],
    &[PrimitiveRestartIndex, PrimitiveRestartIndexNV],
    &[ProgramParameteri, ProgramParameteriARB, ProgramParameteriEXT],
    &[RenderbufferStorage, RenderbufferStorageEXT],
    &[
        RenderbufferStorageMultisample,
        RenderbufferStorageMultisampleEXT,
    ],
    &[SampleCoverage, SampleCoverageARB],
    &[SpecializeShader, SpecializeShaderARB],
    &[TexBuffer, TexBufferARB, TexBufferEXT],
    &[TexImage3D, TexImage3DEXT],
    &[TexStorage2D, TexStorage2DEXT],
    &[TexSubImage3D, TexSubImage3DEXT],
    &[TextureBarrier, TextureBarrierNV],
    &[Uniform1i, Uniform1iARB],
    &[Uniform4f, Uniform4fARB],
    &[UniformMatrix4fv, UniformMatrix4fvARB],
    &[UnmapBuffer, UnmapBufferARB],
    &[VertexAttribDivisor, VertexAttribDivisorARB],
    &[VertexAttribIPointer, VertexAttribIPointerEXT],
    &[VertexAttribPointer, VertexAttribPointerARB],
];

/// The alias group `command` belongs to, if any.
pub fn aliases_of(command: Command) -> Option<&'static [Command]> {
    ALIAS_GROUPS
        .iter()
        .copied()
        .find(|group| group.contains(&command))
}
